use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::middlewares::RequireJWT;
use crate::models::messages::requests::{CreateNoticeRequest, MessageQueryParams};
use crate::models::{ApiResponse, ErrorCode};

// 张贴课程公告；路由层的访问闸门已限定 Teacher 掩码
pub async fn create_notice(
    service: &MessageService,
    request: &HttpRequest,
    course_id: i64,
    notice_data: CreateNoticeRequest,
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

    if notice_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "title: 标题不能为空",
        )));
    }

    match storage
        .create_message(
            user.id,
            Some(course_id),
            None,
            &notice_data.title,
            &notice_data.body,
        )
        .await
    {
        Ok(notice) => {
            tracing::info!(
                "User {} posted notice {} in course {}",
                user.id,
                notice.id,
                course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(notice, "Notice posted")))
        }
        Err(e) => {
            tracing::error!("Failed to post notice in course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to post notice: {e}"),
                )),
            )
        }
    }
}

// 课程公告列表；路由层的访问闸门已限定 Member 掩码
pub async fn list_notices(
    service: &MessageService,
    request: &HttpRequest,
    course_id: i64,
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
        .list_notices_with_pagination(course_id, user_id, query.pagination)
        .await
    {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Notices retrieved")))
        }
        Err(e) => {
            tracing::error!("Failed to list notices for course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list notices: {e}"),
                )),
            )
        }
    }
}
