use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::UpdateSeatRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 变更座号；路由层的访问闸门已限定 Student 掩码。
/// 幂等：重复提交同一座号不报错。
pub async fn update_seat(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
    seat_data: UpdateSeatRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    match storage
        .update_enrollment_seat(course_id, user_id, seat_data.seat)
        .await
    {
        Ok(Some(enrollment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, "Seat updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to update seat: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update seat: {e}"),
                )),
            )
        }
    }
}
