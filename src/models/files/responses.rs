use serde::{Deserialize, Serialize};

// 上传成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUploadResponse {
    pub token: String,
    pub original_name: String,
    pub size: i64,
    pub content_type: String,
}
