use serde::{Deserialize, Serialize};

use crate::models::common::PaginatedResponse;
use crate::models::messages::entities::Message;

// 信件条目，标注当前用户的阅读时间（未读为 None）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageListItem {
    #[serde(flatten)]
    pub message: Message,
    pub read: Option<chrono::DateTime<chrono::Utc>>,
}

pub type MessageListResponse = PaginatedResponse<MessageListItem>;
