use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::requests::UpdatePasswordRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password;

pub async fn update_password(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    password_data: UpdatePasswordRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_password(&password_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 密码验证：两次输入必须一致
    if password_data.password != password_data.password2 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "password: 两次输入的密码不一致",
        )));
    }

    let password_hash = match hash_password(&password_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to hash password",
                )),
            );
        }
    };

    match storage.update_user_password(user_id, &password_hash).await {
        Ok(true) => {
            tracing::info!("Password reset for user {}", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password updated")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update password for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update password: {e}"),
                )),
            )
        }
    }
}
