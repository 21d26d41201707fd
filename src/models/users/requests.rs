use serde::Deserialize;

use crate::models::common::PaginationQuery;
use crate::models::users::entities::UserRole;

// 用户列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UserQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// 创建用户请求（管理员）；自助注册使用 auth::RegisterRequest
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub real_name: Option<String>,
    pub school: Option<String>,
}

// 更新用户请求
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub real_name: Option<String>,
    pub school: Option<String>,
}

// 修改密码请求（管理员重设，不要求旧密码）
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
    // 密码验证：两次输入必须一致
    pub password2: String,
}
