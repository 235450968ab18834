use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::models::Course;

/// JSON 配列のコースデータを読み込む
pub fn load_courses(path: &Path) -> Result<Vec<Course>, AppError> {
    let raw = fs::read_to_string(path)?;
    let courses = parse_courses(&raw)?;
    info!("loaded {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

pub fn parse_courses(raw: &str) -> Result<Vec<Course>, AppError> {
    let courses: Vec<Course> = serde_json::from_str(raw)?;
    validate_courses(&courses)?;
    Ok(courses)
}

/// Ids must be unique, credits positive, and every course offered in some semester.
pub fn validate_courses(courses: &[Course]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if !seen.insert(course.id) {
            return Err(AppError::InvalidDataset(format!("duplicate course id {}", course.id)));
        }
        if course.credits == 0 {
            return Err(AppError::InvalidDataset(format!(
                "course {} ({}) has zero credits",
                course.id, course.header
            )));
        }
        if course.semesters.is_empty() {
            return Err(AppError::InvalidDataset(format!(
                "course {} ({}) is not offered in any semester",
                course.id, course.header
            )));
        }
        let distinct: HashSet<_> = course.semesters.iter().collect();
        if distinct.len() != course.semesters.len() {
            return Err(AppError::InvalidDataset(format!(
                "course {} ({}) lists a semester twice",
                course.id, course.header
            )));
        }
    }
    Ok(())
}
