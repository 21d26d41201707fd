use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::responses::RosterResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 修课名单；路由层的访问闸门已限定 Member 掩码。
/// 按座号排序，附每位学生的累计积点。
pub async fn list_roster(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_roster(course_id).await {
        Ok(entries) => {
            let response = RosterResponse { course_id, entries };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Roster retrieved")))
        }
        Err(e) => {
            tracing::error!("Failed to list roster for course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list roster: {e}"),
                )),
            )
        }
    }
}
