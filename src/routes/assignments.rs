use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentQueryParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::courses::permission::CourseMask;
use crate::models::works::requests::SubmitWorkRequest;
use crate::services::{AssignmentService, WorkService};
use crate::utils::{SafeAssignmentIdI64, SafeCourseIdI64};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static WORK_SERVICE: Lazy<WorkService> = Lazy::new(WorkService::new_lazy);

// HTTP处理程序
pub async fn list_assignments(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<AssignmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, course_id.0, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, course_id.0, assignment_data.into_inner())
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment(&req, assignment_id.0)
        .await
}

pub async fn update_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    update_data: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, assignment_id.0, update_data.into_inner())
        .await
}

pub async fn submit_work(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    submit_data: web::Json<SubmitWorkRequest>,
) -> ActixResult<HttpResponse> {
    WORK_SERVICE
        .submit_work(&req, assignment_id.0, submit_data.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    // 课程内的作业集合
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_assignments)
                            .wrap(middlewares::RequireCourseAccess::new(CourseMask::MEMBER)),
                    )
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireCourseAccess::new(CourseMask::TEACHER)),
                    ),
            ),
    );

    // 单个作业；课程归属在服务层解析后过闸门
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{assignment_id}")
                    .route(web::get().to(get_assignment))
                    .route(web::put().to(update_assignment)),
            )
            .service(web::resource("/{assignment_id}/works").route(web::post().to(submit_work))),
    );
}
