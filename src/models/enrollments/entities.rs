use serde::{Deserialize, Serialize};

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    pub student_id: i64,
    // 座号，默认 0
    pub seat: i32,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
