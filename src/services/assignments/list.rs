use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::{RequireCourseAccess, RequireJWT};
use crate::models::assignments::requests::{AssignmentListQuery, AssignmentQueryParams};
use crate::models::courses::permission::CourseLevel;
use crate::models::{ApiResponse, ErrorCode};

// 路由层的访问闸门已限定 Member 掩码。
// 学生视角附"我是否已交"标注，教师/管理员不标注。
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    course_id: i64,
    query: AssignmentQueryParams,
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

    let annotate_user_id = match RequireCourseAccess::extract_course_level(request) {
        Some(CourseLevel::Student) => Some(user.id),
        _ => None,
    };

    let list_query = AssignmentListQuery {
        course_id,
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        annotate_user_id,
    };

    match storage.list_assignments_with_pagination(list_query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Assignments retrieved")))
        }
        Err(e) => {
            tracing::error!("Failed to list assignments for course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list assignments: {e}"),
                )),
            )
        }
    }
}
