pub mod get;
pub mod list;
pub mod notice;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::messages::requests::{
    CreateNoticeRequest, MessageQueryParams, SendMessageRequest,
};
use crate::storage::Storage;

pub struct MessageService {
    storage: Option<Arc<dyn Storage>>,
}

impl MessageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 发送私信
    pub async fn send_message(
        &self,
        request: &HttpRequest,
        message_data: SendMessageRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_message(self, request, message_data).await
    }

    // 张贴课程公告
    pub async fn create_notice(
        &self,
        request: &HttpRequest,
        course_id: i64,
        notice_data: CreateNoticeRequest,
    ) -> ActixResult<HttpResponse> {
        notice::create_notice(self, request, course_id, notice_data).await
    }

    // 课程公告列表
    pub async fn list_notices(
        &self,
        request: &HttpRequest,
        course_id: i64,
        query: MessageQueryParams,
    ) -> ActixResult<HttpResponse> {
        notice::list_notices(self, request, course_id, query).await
    }

    // 收件匣
    pub async fn list_inbox(
        &self,
        request: &HttpRequest,
        query: MessageQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_inbox(self, request, query).await
    }

    // 寄件匣
    pub async fn list_outbox(
        &self,
        request: &HttpRequest,
        query: MessageQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_outbox(self, request, query).await
    }

    // 读信（首次打开标记已读）
    pub async fn get_message(
        &self,
        request: &HttpRequest,
        message_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_message(self, request, message_id).await
    }
}
