pub mod grade;
pub mod student;
pub mod subject;

pub use grade::{grade, Grade};
pub use student::{GradeResult, Marks, Roster, Student};
pub use subject::Subject;
