use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::WorkService;
use crate::middlewares::RequireJWT;
use crate::models::courses::permission::CourseMask;
use crate::models::works::requests::SubmitWorkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::access::require_course_access;

// 繳交作业
//
// 重复提交不拒绝，每次提交都固定累积提交积点。
// 附件 token 若给出则必须已登记。
pub async fn submit_work(
    service: &WorkService,
    request: &HttpRequest,
    assignment_id: i64,
    submit_data: SubmitWorkRequest,
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

    if let Err(response) =
        require_course_access(&storage, &user, assignment.course_id, CourseMask::STUDENT).await
    {
        return Ok(response);
    }

    if let Some(token) = &submit_data.attachment_token {
        match storage.get_file_by_token(token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    "attachment_token: 附件不存在",
                )));
            }
            Err(e) => {
                tracing::error!("Failed to look up attachment {}: {}", token, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to look up attachment: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .submit_work(
            assignment_id,
            user.id,
            &submit_data.memo,
            submit_data.attachment_token.as_deref(),
        )
        .await
    {
        Ok(work) => {
            tracing::info!(
                "User {} submitted work {} for assignment {}",
                user.id,
                work.id,
                assignment_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(work, "Work submitted")))
        }
        Err(e) => {
            tracing::error!(
                "Failed to submit work for assignment {} user {}: {}",
                assignment_id,
                user.id,
                e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to submit work: {e}"),
                )),
            )
        }
    }
}
