use serde::{Deserialize, Serialize};

// 修课名单条目：座号排序，附累计积点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub enrollment_id: i64,
    pub student_id: i64,
    pub username: String,
    pub real_name: Option<String>,
    pub seat: i32,
    // 该学生在 point_histories 中的积点总和
    pub points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub course_id: i64,
    pub entries: Vec<RosterEntry>,
}
