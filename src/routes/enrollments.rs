use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::permission::CourseMask;
use crate::models::enrollments::requests::{EnrollRequest, UpdateSeatRequest};
use crate::services::EnrollmentService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn enroll(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .enroll(&req, course_id.0, enroll_data.into_inner())
        .await
}

pub async fn update_seat(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    seat_data: web::Json<UpdateSeatRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_seat(&req, course_id.0, seat_data.into_inner())
        .await
}

pub async fn list_roster(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_roster(&req, course_id.0).await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/enroll").route(
                    web::post()
                        .to(enroll)
                        // 仅局外人可选课，已是成员的请求在闸门被拒
                        .wrap(middlewares::RequireCourseAccess::new(CourseMask::GUEST))
                        // 限频防止暴力猜测选课密码
                        .wrap(middlewares::RateLimit::enroll()),
                ),
            )
            .service(
                web::resource("/seat").route(
                    web::put()
                        .to(update_seat)
                        // 仅修课学生可改自己的座号
                        .wrap(middlewares::RequireCourseAccess::new(CourseMask::STUDENT)),
                ),
            )
            .service(
                web::resource("/roster").route(
                    web::get()
                        .to(list_roster)
                        // 名单对课程成员开放
                        .wrap(middlewares::RequireCourseAccess::new(CourseMask::MEMBER)),
                ),
            ),
    );
}
