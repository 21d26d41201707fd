use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 切换教师身份：普通用户升为教师，教师降回普通用户。
/// 管理员角色不能通过此接口变更。
pub async fn toggle_teacher(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to get user {}: {}", user_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get user: {e}"),
                )),
            );
        }
    };

    let new_role = match user.role {
        UserRole::User => UserRole::Teacher,
        UserRole::Teacher => UserRole::User,
        UserRole::Admin => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Cannot toggle teacher role for an admin",
            )));
        }
    };

    match storage.set_user_role(user_id, new_role).await {
        Ok(Some(user)) => {
            tracing::info!("User {} role switched to {}", user.username, user.role);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "Teacher role toggled")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to toggle teacher role for {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to toggle teacher role: {e}"),
                )),
            )
        }
    }
}
