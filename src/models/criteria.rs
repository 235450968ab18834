use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::course::Semester;

const ANY: &str = "any";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LevelFilter {
    #[default]
    Any,
    Level100,
    Level200,
    Level300,
    Level400,
}

impl LevelFilter {
    pub fn hundreds(self) -> Option<u32> {
        match self {
            LevelFilter::Any => None,
            LevelFilter::Level100 => Some(100),
            LevelFilter::Level200 => Some(200),
            LevelFilter::Level300 => Some(300),
            LevelFilter::Level400 => Some(400),
        }
    }
}

impl FromStr for LevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case(ANY) => Ok(LevelFilter::Any),
            "100" => Ok(LevelFilter::Level100),
            "200" => Ok(LevelFilter::Level200),
            "300" => Ok(LevelFilter::Level300),
            "400" => Ok(LevelFilter::Level400),
            other => Err(format!("unknown course level: {}", other)),
        }
    }
}

impl TryFrom<String> for LevelFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LevelFilter> for String {
    fn from(value: LevelFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hundreds() {
            Some(level) => write!(f, "{}", level),
            None => f.write_str(ANY),
        }
    }
}

/// Credit filter. On the wire it is either `"any"` or a credit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "CreditRepr", into = "CreditRepr")]
pub enum CreditFilter {
    #[default]
    Any,
    Exactly(u32),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CreditRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<CreditRepr> for CreditFilter {
    type Error = String;

    fn try_from(value: CreditRepr) -> Result<Self, Self::Error> {
        match value {
            CreditRepr::Number(n) => Ok(CreditFilter::Exactly(n)),
            CreditRepr::Text(s) if s.trim().eq_ignore_ascii_case(ANY) => Ok(CreditFilter::Any),
            CreditRepr::Text(s) => s
                .trim()
                .parse()
                .map(CreditFilter::Exactly)
                .map_err(|_| format!("invalid credit filter: {}", s)),
        }
    }
}

impl From<CreditFilter> for CreditRepr {
    fn from(value: CreditFilter) -> Self {
        match value {
            CreditFilter::Any => CreditRepr::Text(ANY.to_string()),
            CreditFilter::Exactly(n) => CreditRepr::Number(n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SemesterFilter {
    #[default]
    Any,
    Only(Semester),
}

impl TryFrom<String> for SemesterFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(ANY) {
            return Ok(SemesterFilter::Any);
        }
        value.parse().map(SemesterFilter::Only)
    }
}

impl From<SemesterFilter> for String {
    fn from(value: SemesterFilter) -> Self {
        match value {
            SemesterFilter::Any => ANY.to_string(),
            SemesterFilter::Only(sem) => sem.code().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub level: LevelFilter,
    pub credits: CreditFilter,
    pub semester: SemesterFilter,
    pub favorites_only: bool,
}

/// Partial criteria change; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaUpdate {
    pub search: Option<String>,
    pub level: Option<LevelFilter>,
    pub credits: Option<CreditFilter>,
    pub semester: Option<SemesterFilter>,
    pub favorites_only: Option<bool>,
}

impl CriteriaUpdate {
    pub fn apply_to(self, criteria: &mut FilterCriteria) {
        if let Some(search) = self.search {
            criteria.search = search;
        }
        if let Some(level) = self.level {
            criteria.level = level;
        }
        if let Some(credits) = self.credits {
            criteria.credits = credits;
        }
        if let Some(semester) = self.semester {
            criteria.semester = semester;
        }
        if let Some(favorites_only) = self.favorites_only {
            criteria.favorites_only = favorites_only;
        }
    }
}
