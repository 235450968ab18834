use crate::models::{Course, CreditFilter, FilterCriteria, LevelFilter, SemesterFilter};

use super::favorites::Favorites;

/// Courses that pass every active criterion, in their original order.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    criteria: &FilterCriteria,
    favorites: &Favorites,
) -> Vec<&'a Course> {
    let needle = criteria.search.to_lowercase();
    courses
        .iter()
        .filter(|course| course_matches(course, criteria, favorites, &needle))
        .collect()
}

fn course_matches(
    course: &Course,
    criteria: &FilterCriteria,
    favorites: &Favorites,
    needle: &str,
) -> bool {
    // flags and numbers first, string scans last
    favorites_match(course, criteria.favorites_only, favorites)
        && credit_match(course, criteria.credits)
        && semester_match(course, criteria.semester)
        && level_match(course, criteria.level)
        && search_match(course, needle)
}

fn favorites_match(course: &Course, favorites_only: bool, favorites: &Favorites) -> bool {
    !favorites_only || favorites.contains(course.id)
}

fn credit_match(course: &Course, filter: CreditFilter) -> bool {
    match filter {
        CreditFilter::Any => true,
        CreditFilter::Exactly(credits) => course.credits == credits,
    }
}

fn semester_match(course: &Course, filter: SemesterFilter) -> bool {
    match filter {
        SemesterFilter::Any => true,
        SemesterFilter::Only(semester) => course.offered_in(semester),
    }
}

/// A header with no course number never matches a concrete level.
fn level_match(course: &Course, filter: LevelFilter) -> bool {
    match filter.hundreds() {
        None => true,
        Some(level) => course.level() == Some(level),
    }
}

/// `needle` is already lowercased.
fn search_match(course: &Course, needle: &str) -> bool {
    needle.is_empty()
        || course.header.to_lowercase().contains(needle)
        || course.title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseId, Semester};

    fn course(id: u32, header: &str, title: &str, credits: u32, semesters: &[Semester]) -> Course {
        Course {
            id: CourseId(id),
            header: header.to_string(),
            title: title.to_string(),
            description: String::new(),
            credits,
            semesters: semesters.to_vec(),
        }
    }

    fn sample() -> Vec<Course> {
        vec![
            course(1, "CS 142", "Introduction to Computer Programming", 3, &[Semester::Fall]),
            course(
                2,
                "CS 235",
                "Data Structures and Algorithms",
                4,
                &[Semester::Winter, Semester::Spring],
            ),
        ]
    }

    fn ids(courses: &[&Course]) -> Vec<u32> {
        courses.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn default_criteria_keep_everything_in_order() {
        let courses = sample();
        let result = filter_courses(&courses, &FilterCriteria::default(), &Favorites::new());
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn each_filter_selects_expected_course() {
        let courses = sample();
        let favorites = Favorites::new();

        let by_level = FilterCriteria { level: LevelFilter::Level100, ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, &by_level, &favorites)), vec![1]);

        let by_credits = FilterCriteria { credits: CreditFilter::Exactly(4), ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, &by_credits, &favorites)), vec![2]);

        let by_semester = FilterCriteria {
            semester: SemesterFilter::Only(Semester::Spring),
            ..Default::default()
        };
        assert_eq!(ids(&filter_courses(&courses, &by_semester, &favorites)), vec![2]);

        let by_search = FilterCriteria { search: "cs 2".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, &by_search, &favorites)), vec![2]);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let courses = sample();
        let criteria = FilterCriteria { search: "ALGORITHMS".to_string(), ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, &criteria, &Favorites::new())), vec![2]);
    }

    #[test]
    fn search_ignores_description() {
        let mut courses = sample();
        courses[0].description = "recursion and pointers".to_string();
        let criteria = FilterCriteria { search: "recursion".to_string(), ..Default::default() };
        assert!(filter_courses(&courses, &criteria, &Favorites::new()).is_empty());
    }

    #[test]
    fn header_without_digits_fails_closed_on_level() {
        let courses = vec![course(9, "CS Seminar", "Topics", 1, &[Semester::Fall])];
        let favorites = Favorites::new();

        for level in [LevelFilter::Level100, LevelFilter::Level400] {
            let criteria = FilterCriteria { level, ..Default::default() };
            assert!(filter_courses(&courses, &criteria, &favorites).is_empty());
        }
        assert_eq!(
            ids(&filter_courses(&courses, &FilterCriteria::default(), &favorites)),
            vec![9]
        );
    }

    #[test]
    fn favorites_only_uses_favorites_set() {
        let courses = sample();
        let mut favorites = Favorites::new();
        favorites.toggle(CourseId(1));

        let criteria = FilterCriteria { favorites_only: true, ..Default::default() };
        assert_eq!(ids(&filter_courses(&courses, &criteria, &favorites)), vec![1]);
    }

    #[test]
    fn predicates_are_anded() {
        let courses = sample();
        let criteria = FilterCriteria {
            level: LevelFilter::Level200,
            credits: CreditFilter::Exactly(3),
            ..Default::default()
        };
        assert!(filter_courses(&courses, &criteria, &Favorites::new()).is_empty());
    }
}
