use serde::Deserialize;

use crate::models::common::PaginationQuery;

// 收件匣/寄件匣查询参数
#[derive(Debug, Deserialize)]
pub struct MessageQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 发送私信请求
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: i64,
    pub title: String,
    pub body: String,
}

// 张贴课程公告请求（course_id 取自路径）
#[derive(Debug, Deserialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub body: String,
}
