use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::AssignmentDetailResponse;
use crate::models::courses::permission::{CourseLevel, CourseMask};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::access::require_course_access;

// 作业详情
//
// 路径里没有 course_id，先加载作业再按所属课程过 Member 闸门。
// 教师/管理员看到按座号的交作业状况，学生看到自己的提交。
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
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

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load assignment {}: {}", assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load assignment: {e}"),
                )),
            );
        }
    };

    let (_course, level) =
        match require_course_access(&storage, &user, assignment.course_id, CourseMask::MEMBER)
            .await
        {
            Ok(access) => access,
            Err(response) => return Ok(response),
        };

    let response = if user.is_admin() || level == CourseLevel::Teacher {
        let work_matrix = match storage
            .list_work_matrix(assignment.course_id, assignment_id)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(
                    "Failed to load work matrix for assignment {}: {}",
                    assignment_id,
                    e
                );
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load work matrix: {e}"),
                    )),
                );
            }
        };
        AssignmentDetailResponse {
            assignment,
            work_matrix: Some(work_matrix),
            my_work: None,
        }
    } else {
        let my_work = match storage
            .get_work_by_assignment_and_user(assignment_id, user.id)
            .await
        {
            Ok(work) => work,
            Err(e) => {
                tracing::error!(
                    "Failed to load work for assignment {} user {}: {}",
                    assignment_id,
                    user.id,
                    e
                );
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load work: {e}"),
                    )),
                );
            }
        };
        AssignmentDetailResponse {
            assignment,
            work_matrix: None,
            my_work,
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Assignment retrieved")))
}
