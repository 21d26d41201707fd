pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod files;
pub mod messages;
pub mod points;
pub mod users;
pub mod works;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use files::FileService;
pub use messages::MessageService;
pub use points::PointService;
pub use users::UserService;
pub use works::WorkService;
