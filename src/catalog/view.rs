use serde::Serialize;

use crate::models::{Course, CourseId, FilterCriteria, Semester};

use super::pagination::PageInfo;

pub const PREVIEW_CHARS: usize = 120;

#[derive(Debug, Clone, Serialize)]
pub struct CourseCard {
    pub id: CourseId,
    pub header: String,
    pub title: String,
    pub credits: u32,
    pub semesters: Vec<Semester>,
    pub preview: String,
    pub is_favorite: bool,
}

impl CourseCard {
    pub fn new(course: &Course, is_favorite: bool) -> Self {
        Self {
            id: course.id,
            header: course.header.clone(),
            title: course.title.clone(),
            credits: course.credits,
            semesters: course.semesters.clone(),
            preview: course.description_preview(PREVIEW_CHARS),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditOption {
    pub value: u32,
    pub label: String,
}

impl CreditOption {
    pub fn new(value: u32) -> Self {
        let unit = if value == 1 { "credit" } else { "credits" };
        Self {
            value,
            label: format!("{} {}", value, unit),
        }
    }
}

/// Everything the grid needs to render one state of the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub courses: Vec<CourseCard>,
    pub shown: usize,
    pub filtered: usize,
    pub total: usize,
    #[serde(flatten)]
    pub page: PageInfo,
    pub criteria: FilterCriteria,
    pub credit_options: Vec<CreditOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub course: Course,
    pub heading: String,
    pub semester_names: Vec<&'static str>,
    pub is_favorite: bool,
}

impl DetailView {
    pub fn new(course: &Course, is_favorite: bool) -> Self {
        Self {
            course: course.clone(),
            heading: format!("{}: {}", course.header, course.title),
            semester_names: course.semesters.iter().map(|s| s.label()).collect(),
            is_favorite,
        }
    }
}
