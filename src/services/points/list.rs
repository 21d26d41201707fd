use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PointService;
use crate::middlewares::RequireJWT;
use crate::models::common::PaginationQuery;
use crate::models::{ApiResponse, ErrorCode};

// 本人积点流水，新到旧
pub async fn list_point_histories(
    service: &PointService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user claims",
            )));
        }
    };

    match storage
        .list_point_histories_with_pagination(user_id, query)
        .await
    {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Point histories retrieved")))
        }
        Err(e) => {
            tracing::error!("Failed to list point histories for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list point histories: {e}"),
                )),
            )
        }
    }
}
