use serde::Deserialize;

use crate::models::common::PaginationQuery;

// 作业列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct AssignmentQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 作业列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub course_id: i64,
    pub page: Option<i64>,
    pub size: Option<i64>,
    // 标注"该用户是否已提交"时使用
    pub annotate_user_id: Option<i64>,
}

// 新增作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
}

// 修改作业请求
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}
