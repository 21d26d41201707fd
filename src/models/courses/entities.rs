use serde::{Deserialize, Serialize};

// 课程
//
// 每门课程只有一位授课教师（teacher_id）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    // 选课密码，不随响应下发
    #[serde(skip_serializing)]
    pub enroll_secret: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
