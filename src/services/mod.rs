pub mod averages;
pub mod class_students;
pub mod classes;
pub mod events;
pub mod marks;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod timetables;

pub use averages::AverageService;
pub use class_students::ClassStudentService;
pub use classes::ClassService;
pub use events::EventService;
pub use marks::MarkService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use timetables::TimetableService;
