use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use super::access::resolve_course_access;
use crate::middlewares::RequireJWT;
use crate::models::courses::responses::CourseDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
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

    // 课程详情对所有登录用户可见，响应附身份层级供前端区分视图
    let (course, level) = match resolve_course_access(&storage, &user, course_id).await {
        Ok(access) => access,
        Err(response) => return Ok(response),
    };

    let response = CourseDetailResponse {
        course,
        level: level.to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Course retrieved")))
}
