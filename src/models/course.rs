use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semester codes as they appear in the dataset (`F`, `W`, `SP`, `SU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    #[serde(rename = "F", alias = "Fall")]
    Fall,
    #[serde(rename = "W", alias = "Winter")]
    Winter,
    #[serde(rename = "SP", alias = "Spring")]
    Spring,
    #[serde(rename = "SU", alias = "Summer")]
    Summer,
}

impl Semester {
    pub const ALL: [Semester; 4] = [
        Semester::Fall,
        Semester::Winter,
        Semester::Spring,
        Semester::Summer,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Semester::Fall => "F",
            Semester::Winter => "W",
            Semester::Spring => "SP",
            Semester::Summer => "SU",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Winter => "Winter",
            Semester::Spring => "Spring",
            Semester::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Semester::ALL
            .into_iter()
            .find(|sem| {
                sem.code().eq_ignore_ascii_case(trimmed)
                    || sem.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| format!("unknown semester: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub header: String,
    pub title: String,
    pub description: String,
    pub credits: u32,
    pub semesters: Vec<Semester>,
}

impl Course {
    /// First run of ASCII digits in the header ("CS 142" -> 142).
    ///
    /// `None` when the header has no digits or the run does not fit in a `u32`.
    pub fn course_number(&self) -> Option<u32> {
        let start = self.header.find(|c: char| c.is_ascii_digit())?;
        let rest = &self.header[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..end].parse().ok()
    }

    /// Hundreds bucket of the course number, 142 -> 100.
    pub fn level(&self) -> Option<u32> {
        self.course_number().map(|n| n / 100 * 100)
    }

    pub fn offered_in(&self, semester: Semester) -> bool {
        self.semesters.contains(&semester)
    }

    /// Card preview: the first `max_chars` characters followed by "...".
    pub fn description_preview(&self, max_chars: usize) -> String {
        let head: String = self.description.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
