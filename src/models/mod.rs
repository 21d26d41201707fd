//! 业务模型定义
//!
//! 与 entity 中的数据库模型分离，服务层与路由层只接触这里的类型。

pub mod common;

pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod files;
pub mod messages;
pub mod points;
pub mod users;
pub mod works;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码，随 ApiResponse 返回给客户端
///
/// 约定：0 表示成功；41x/43x/44x 等与 HTTP 状态码同族；
/// 1000 以上为领域内细分错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 4000,
    Unauthorized = 4010,
    Forbidden = 4030,
    NotFound = 4040,
    Conflict = 4090,
    RateLimited = 4290,
    InternalServerError = 5000,

    // 用户
    UserNotFound = 1001,
    UserAlreadyExists = 1002,
    InvalidCredentials = 1003,

    // 课程与选课
    CourseNotFound = 2001,
    CoursePermissionDenied = 2002,
    EnrollSecretMismatch = 2003,
    EnrollmentNotFound = 2004,
    CourseCreationFailed = 2005,

    // 作业与提交
    AssignmentNotFound = 3001,
    WorkNotFound = 3002,
    WorkNotOwned = 3003,
    WorkAlreadyScored = 3004,
    InvalidScore = 3005,

    // 消息
    MessageNotFound = 6001,

    // 附件
    FileNotFound = 7001,
    FileUploadFailed = 7002,
    FileTooLarge = 7003,
    FileTypeNotAllowed = 7004,
    MultifileUploadNotAllowed = 7005,
}

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
