use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::permission::CourseMask;
use crate::models::messages::requests::{
    CreateNoticeRequest, MessageQueryParams, SendMessageRequest,
};
use crate::services::MessageService;
use crate::utils::{SafeCourseIdI64, SafeMessageIdI64};

// 懒加载的全局 MessageService 实例
static MESSAGE_SERVICE: Lazy<MessageService> = Lazy::new(MessageService::new_lazy);

// HTTP处理程序
pub async fn send_message(
    req: HttpRequest,
    message_data: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .send_message(&req, message_data.into_inner())
        .await
}

pub async fn list_inbox(
    req: HttpRequest,
    query: web::Query<MessageQueryParams>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.list_inbox(&req, query.into_inner()).await
}

pub async fn list_outbox(
    req: HttpRequest,
    query: web::Query<MessageQueryParams>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.list_outbox(&req, query.into_inner()).await
}

pub async fn get_message(
    req: HttpRequest,
    message_id: SafeMessageIdI64,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.get_message(&req, message_id.0).await
}

pub async fn create_notice(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    notice_data: web::Json<CreateNoticeRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .create_notice(&req, course_id.0, notice_data.into_inner())
        .await
}

pub async fn list_notices(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<MessageQueryParams>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .list_notices(&req, course_id.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_messages_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/messages")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(send_message)
                        .wrap(middlewares::RateLimit::message_send()),
                ),
            )
            .route("/inbox", web::get().to(list_inbox))
            .route("/outbox", web::get().to(list_outbox))
            .service(web::resource("/{message_id}").route(web::get().to(get_message))),
    );

    // 课程公告
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/notices")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_notices)
                            .wrap(middlewares::RequireCourseAccess::new(CourseMask::MEMBER)),
                    )
                    .route(
                        web::post()
                            .to(create_notice)
                            .wrap(middlewares::RequireCourseAccess::new(CourseMask::TEACHER))
                            .wrap(middlewares::RateLimit::message_send()),
                    ),
            ),
    );
}
