use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::SendMessageRequest;
use crate::models::{ApiResponse, ErrorCode};

// 发送私信；收件人必须存在
pub async fn send_message(
    service: &MessageService,
    request: &HttpRequest,
    message_data: SendMessageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user claims",
            )));
        }
    };

    if message_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "title: 标题不能为空",
        )));
    }

    match storage.get_user_by_id(message_data.recipient_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Recipient not found",
            )));
        }
        Err(e) => {
            tracing::error!(
                "Failed to look up recipient {}: {}",
                message_data.recipient_id,
                e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to look up recipient: {e}"),
                )),
            );
        }
    }

    match storage
        .create_message(
            user.id,
            None,
            Some(message_data.recipient_id),
            &message_data.title,
            &message_data.body,
        )
        .await
    {
        Ok(message) => {
            tracing::info!(
                "User {} sent message {} to user {}",
                user.id,
                message.id,
                message_data.recipient_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(message, "Message sent")))
        }
        Err(e) => {
            tracing::error!("Failed to send message from user {}: {}", user.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to send message: {e}"),
                )),
            )
        }
    }
}
