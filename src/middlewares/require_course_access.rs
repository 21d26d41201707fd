/*!
 * 基于课程身份层级的访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用，从路径中的 course_id
 * 加载课程、解析当前用户的身份层级，并按声明的权限掩码判定放行。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/courses/{course_id}/assignments")
 *     .wrap(RequireCourseAccess::new(CourseMask::MEMBER))
 * ```
 *
 * 放行后会把 `Course` 与 `CourseLevel` 插入请求扩展，
 * 处理程序可通过 `extract_course` / `extract_course_level` 读取，
 * 不必再查一次库。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::debug;

use crate::{
    models::{
        ErrorCode,
        courses::{
            entities::Course,
            permission::{CourseLevel, CourseMask, authorize, resolve_level},
        },
        users::entities::User,
    },
    storage::Storage,
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireCourseAccess {
    required: CourseMask,
}

impl RequireCourseAccess {
    /// 创建声明了权限掩码的中间件
    pub fn new(required: CourseMask) -> Self {
        Self { required }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireCourseAccess
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireCourseAccessMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireCourseAccessMiddleware {
            service: Rc::new(service),
            required: self.required,
        }))
    }
}

pub struct RequireCourseAccessMiddleware<S> {
    service: Rc<S>,
    required: CourseMask,
}

impl<S, B> Service<ServiceRequest> for RequireCourseAccessMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let required = self.required;

        Box::pin(async move {
            // 1. 校验用户信息
            let user_opt = req.extensions().get::<User>().cloned();
            let user = match user_opt {
                Some(user) => user,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Unauthorized: missing user claims",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 2. 校验 course_id
            let course_id = match req
                .match_info()
                .get("course_id")
                .and_then(|s| s.parse::<i64>().ok())
            {
                Some(cid) => cid,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::BAD_REQUEST,
                            ErrorCode::BadRequest,
                            "Missing or invalid course_id",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 3. 加载课程
            let storage = req
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone();

            let course = match storage.get_course_by_id(course_id).await {
                Ok(Some(course)) => course,
                Ok(None) => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::NOT_FOUND,
                            ErrorCode::CourseNotFound,
                            "Course not found",
                        )
                        .map_into_right_body(),
                    ));
                }
                Err(e) => {
                    tracing::error!("Failed to load course {}: {}", course_id, e);
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            "Failed to load course",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 4. 解析身份层级；管理员不经过解析直接放行闸门
            let enrolled = if user.is_admin() || course.teacher_id == user.id {
                false
            } else {
                match storage.get_enrollment(course_id, user.id).await {
                    Ok(record) => record.is_some(),
                    Err(e) => {
                        tracing::error!("Failed to query enrollment: {}", e);
                        return Ok(req.into_response(
                            create_error_response(
                                StatusCode::INTERNAL_SERVER_ERROR,
                                ErrorCode::InternalServerError,
                                "Failed to resolve course access",
                            )
                            .map_into_right_body(),
                        ));
                    }
                }
            };
            let level = resolve_level(&course, user.id, enrolled);

            // 5. 闸门判定
            if authorize(Some(required), level, user.is_admin()) {
                debug!(
                    "Course access granted: user {} level {} on course {}",
                    user.id, level, course_id
                );
                req.extensions_mut().insert(course);
                req.extensions_mut().insert(level);
                let res = srv.call(req).await?.map_into_left_body();
                Ok(res)
            } else {
                Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::CoursePermissionDenied,
                        "No permission for this course",
                    )
                    .map_into_right_body(),
                ))
            }
        })
    }
}

// 辅助函数：从请求中提取闸门已加载的课程信息
impl RequireCourseAccess {
    /// 从请求扩展中提取课程
    /// 此函数应该在应用了RequireCourseAccess中间件的路由处理程序中使用
    pub fn extract_course(req: &actix_web::HttpRequest) -> Option<Course> {
        req.extensions().get::<Course>().cloned()
    }

    /// 从请求扩展中提取当前用户的课程身份层级
    pub fn extract_course_level(req: &actix_web::HttpRequest) -> Option<CourseLevel> {
        req.extensions().get::<CourseLevel>().copied()
    }
}
