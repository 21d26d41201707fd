use serde::Deserialize;

use crate::models::common::PaginationQuery;

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    // 按授课教师筛选
    pub teacher_id: Option<i64>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 创建课程请求
//
// enroll_secret 可省略，省略时由服务端随机生成。
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub enroll_secret: Option<String>,
}

// 更新课程请求
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub enroll_secret: Option<String>,
}
