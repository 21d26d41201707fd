use serde::{Deserialize, Serialize};

/// 未评分哨兵值：score == 0 表示尚未评分
pub const UNGRADED: i32 = 0;

// 作业提交
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    // 心得
    pub memo: String,
    pub attachment_token: Option<String>,
    pub score: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Work {
    /// 尚未评分的提交允许学生本人修改；评分后锁定
    pub fn is_graded(&self) -> bool {
        self.score != UNGRADED
    }
}
