use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::WorkService;
use crate::middlewares::RequireJWT;
use crate::models::courses::permission::CourseMask;
use crate::models::works::requests::ScoreWorkRequest;
use crate::models::works::responses::ScoreWorkResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::access::require_course_access;
use crate::utils::validate::validate_score;

// 批改评分
//
// 需要所属课程的 Teacher 掩码。改分数与跨档落账在存储层
// 同一事务内完成，这里只做定位、鉴权与参数校验。
pub async fn score_work(
    service: &WorkService,
    request: &HttpRequest,
    work_id: i64,
    score_data: ScoreWorkRequest,
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

    if let Err(message) = validate_score(score_data.score) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidScore,
            format!("score: {message}"),
        )));
    }

    let work = match storage.get_work_by_id(work_id).await {
        Ok(Some(work)) => work,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::WorkNotFound,
                "Work not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load work {}: {}", work_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load work: {e}"),
                )),
            );
        }
    };

    let assignment = match storage.get_assignment_by_id(work.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            tracing::warn!(
                "Work {} references missing assignment {}",
                work_id,
                work.assignment_id
            );
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load assignment {}: {}", work.assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load assignment: {e}"),
                )),
            );
        }
    };

    if let Err(response) =
        require_course_access(&storage, &user, assignment.course_id, CourseMask::TEACHER).await
    {
        return Ok(response);
    }

    match storage.grade_work(work_id, score_data.score).await {
        Ok(Some(outcome)) => {
            let point_delta = outcome.ledger_entry.as_ref().map(|entry| entry.point);
            tracing::info!(
                "Work {} scored {} by user {} (point delta: {:?})",
                work_id,
                score_data.score,
                user.id,
                point_delta
            );
            let response = ScoreWorkResponse {
                work: outcome.work,
                point_delta,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Work scored")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WorkNotFound,
            "Work not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to score work {}: {}", work_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to score work: {e}"),
                )),
            )
        }
    }
}
