use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::works::requests::{ScoreWorkRequest, UpdateWorkRequest};
use crate::services::WorkService;
use crate::utils::SafeWorkIdI64;

// 懒加载的全局 WorkService 实例
static WORK_SERVICE: Lazy<WorkService> = Lazy::new(WorkService::new_lazy);

// HTTP处理程序
pub async fn update_work(
    req: HttpRequest,
    work_id: SafeWorkIdI64,
    update_data: web::Json<UpdateWorkRequest>,
) -> ActixResult<HttpResponse> {
    WORK_SERVICE
        .update_work(&req, work_id.0, update_data.into_inner())
        .await
}

pub async fn score_work(
    req: HttpRequest,
    work_id: SafeWorkIdI64,
    score_data: web::Json<ScoreWorkRequest>,
) -> ActixResult<HttpResponse> {
    WORK_SERVICE
        .score_work(&req, work_id.0, score_data.into_inner())
        .await
}

// 配置路由
//
// 路径里没有 course_id，本人/未评分/任课教师的判定都在服务层。
pub fn configure_works_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/works")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/{work_id}").route(web::put().to(update_work)))
            .service(web::resource("/{work_id}/score").route(web::put().to(score_work))),
    );
}
