pub mod course;
pub mod criteria;

pub use course::{Course, CourseId, Semester};
pub use criteria::{CreditFilter, CriteriaUpdate, FilterCriteria, LevelFilter, SemesterFilter};
