use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::services::EventService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EventService 实例
static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

// 列出事件
pub async fn list_events(
    req: HttpRequest,
    query: web::Query<EventListParams>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_events(&req, query.into_inner()).await
}

// 创建事件
pub async fn create_event(
    req: HttpRequest,
    body: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.create_event(&req, body.into_inner()).await
}

// 获取事件详情
pub async fn get_event(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.get_event(&req, path.0).await
}

// 更新事件
pub async fn update_event(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .update_event(&req, path.0, body.into_inner())
        .await
}

// 删除事件
pub async fn delete_event(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.delete_event(&req, path.0).await
}

// 配置路由
pub fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/events")
            .wrap(middlewares::RateLimit::api())
            .service(
                web::resource("")
                    .route(web::get().to(list_events))
                    .route(
                        web::post()
                            .to(create_event)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_event))
                    .route(
                        web::put()
                            .to(update_event)
                            .wrap(middlewares::RateLimit::write()),
                    )
                    .route(
                        web::delete()
                            .to(delete_event)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            ),
    );
}
