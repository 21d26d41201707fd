use serde::{Deserialize, Serialize};

// 积点流水
//
// 只增不改的流水账：提交与评分的副作用在此落账，
// 任何代码路径都不会更新或删除已写入的纪录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointHistory {
    pub id: i64,
    pub user_id: i64,
    pub assignment_id: i64,
    pub reason: String,
    // 有符号增量，降级时为负
    pub point: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
