use serde::{Deserialize, Serialize};

// 附件元数据；字节内容落在上传目录，按 stored_name 寻址
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub token: String,
    pub original_name: String,
    #[serde(skip_serializing)]
    pub stored_name: String,
    pub size: i64,
    pub content_type: String,
    pub uploader_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
