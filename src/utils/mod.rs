pub mod academic_year;
pub mod extractor;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use academic_year::{AcademicYearWindow, WindowViolation};
pub use extractor::{SafeIDI64, SafeStudentIdI64, SafeSubjectIdI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
