use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::PaginationQuery;
use crate::services::PointService;

// 懒加载的全局 PointService 实例
static POINT_SERVICE: Lazy<PointService> = Lazy::new(PointService::new_lazy);

pub async fn list_point_histories(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    POINT_SERVICE
        .list_point_histories(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_points_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/points")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_point_histories)),
    );
}
