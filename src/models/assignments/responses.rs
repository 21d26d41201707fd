use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Assignment;
use crate::models::common::PaginatedResponse;
use crate::models::works::entities::Work;

// 作业列表条目，标注当前用户的提交时间（未交为 None）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentListItem {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub submitted: Option<chrono::DateTime<chrono::Utc>>,
}

pub type AssignmentListResponse = PaginatedResponse<AssignmentListItem>;

// 教师视角的交作业状况：按座号列出每位修课学生
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkMatrixRow {
    pub seat: i32,
    pub student_id: i64,
    pub real_name: Option<String>,
    pub work_id: Option<i64>,
    pub submitted: Option<chrono::DateTime<chrono::Utc>>,
    pub score: Option<i32>,
}

// 作业详情
//
// 教师/管理员返回 work_matrix；学生返回自己的 my_work。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDetailResponse {
    pub assignment: Assignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_matrix: Option<Vec<WorkMatrixRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_work: Option<Work>,
}
