use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::courses::permission::CourseMask;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::access::require_course_access;

// 读信
//
// 私信只有寄件人、收件人与管理员可见；公告需要课程 Member 掩码。
// 非寄件人首次打开时落已读纪录，重复打开不动。
pub async fn get_message(
    service: &MessageService,
    request: &HttpRequest,
    message_id: i64,
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

    let message = match storage.get_message_by_id(message_id).await {
        Ok(Some(message)) => message,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::MessageNotFound,
                "Message not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load message {}: {}", message_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load message: {e}"),
                )),
            );
        }
    };

    if let Some(course_id) = message.course_id {
        if let Err(response) =
            require_course_access(&storage, &user, course_id, CourseMask::MEMBER).await
        {
            return Ok(response);
        }
    } else {
        let visible = user.is_admin()
            || message.sender_id == user.id
            || message.recipient_id == Some(user.id);
        if !visible {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "No permission to read this message",
            )));
        }
    }

    if message.sender_id != user.id {
        if let Err(e) = storage.mark_message_read(message_id, user.id).await {
            tracing::warn!("Failed to mark message {} read: {}", message_id, e);
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(message, "Message retrieved")))
}
