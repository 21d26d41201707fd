use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::MessageQueryParams;
use crate::models::{ApiResponse, ErrorCode};

// 收件匣：私信 + 修课课程的公告
pub async fn list_inbox(
    service: &MessageService,
    request: &HttpRequest,
    query: MessageQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user claims",
            )));
        }
    };

    match storage
        .list_inbox_with_pagination(user_id, query.pagination)
        .await
    {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Inbox retrieved")))
        }
        Err(e) => {
            tracing::error!("Failed to list inbox for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list inbox: {e}"),
                )),
            )
        }
    }
}

// 寄件匣
pub async fn list_outbox(
    service: &MessageService,
    request: &HttpRequest,
    query: MessageQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user claims",
            )));
        }
    };

    match storage
        .list_outbox_with_pagination(user_id, query.pagination)
        .await
    {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Outbox retrieved")))
        }
        Err(e) => {
            tracing::error!("Failed to list outbox for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list outbox: {e}"),
                )),
            )
        }
    }
}
