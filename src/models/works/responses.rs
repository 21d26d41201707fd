use serde::{Deserialize, Serialize};

use crate::models::works::entities::Work;

// 批改结果：附本次评分落账的积点增量（跨档才有）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWorkResponse {
    #[serde(flatten)]
    pub work: Work,
    pub point_delta: Option<i32>,
}
