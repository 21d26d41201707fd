//! 课程访问解析辅助
//!
//! 作业/提交/公告的路径里没有 course_id 时，服务层用这里的辅助
//! 函数加载课程并解析当前用户的身份层级，再交给访问闸门判定。

use std::sync::Arc;

use actix_web::HttpResponse;

use crate::models::courses::{
    entities::Course,
    permission::{CourseLevel, CourseMask, authorize, resolve_level},
};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 加载课程并解析用户的身份层级
///
/// 课程不存在返回 404 响应，数据库错误返回 500 响应。
pub async fn resolve_course_access(
    storage: &Arc<dyn Storage>,
    user: &User,
    course_id: i64,
) -> Result<(Course, CourseLevel), HttpResponse> {
    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load course {}: {}", course_id, e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load course: {e}"),
                )),
            );
        }
    };

    let enrolled = if user.is_admin() || course.teacher_id == user.id {
        false
    } else {
        match storage.get_enrollment(course_id, user.id).await {
            Ok(record) => record.is_some(),
            Err(e) => {
                tracing::error!("Failed to query enrollment: {}", e);
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to resolve course access: {e}"),
                    )),
                );
            }
        }
    };

    let level = resolve_level(&course, user.id, enrolled);
    Ok((course, level))
}

/// 解析身份层级并立即过闸门，未放行返回 403 响应
pub async fn require_course_access(
    storage: &Arc<dyn Storage>,
    user: &User,
    course_id: i64,
    required: CourseMask,
) -> Result<(Course, CourseLevel), HttpResponse> {
    let (course, level) = resolve_course_access(storage, user, course_id).await?;

    if !authorize(Some(required), level, user.is_admin()) {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "No permission for this course",
        )));
    }

    Ok((course, level))
}
