pub mod assignments;

pub mod auth;

pub mod courses;

pub mod enrollments;

pub mod files;

pub mod messages;

pub mod points;

pub mod users;

pub mod works;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollments_routes;
pub use files::configure_files_routes;
pub use messages::configure_messages_routes;
pub use points::configure_points_routes;
pub use users::configure_user_routes;
pub use works::configure_works_routes;
