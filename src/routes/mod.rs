pub mod averages;

pub mod classes;

pub mod events;

pub mod marks;

pub mod students;

pub mod subjects;

pub mod system;

pub mod teachers;

pub mod timetables;

pub use averages::configure_average_routes;
pub use classes::configure_classes_routes;
pub use events::configure_event_routes;
pub use marks::configure_mark_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teacher_routes;
pub use timetables::configure_timetable_routes;
