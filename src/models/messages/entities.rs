use serde::{Deserialize, Serialize};

// 站内信 / 课程公告
//
// recipient_id 有值为私信，course_id 有值为课程公告，两者互斥。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub course_id: Option<i64>,
    pub recipient_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
