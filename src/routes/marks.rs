use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::{MarkListParams, RecordMarkRequest, UpdateMarkRequest};
use crate::services::MarkService;
use crate::utils::SafeIDI64;

// 懒加载的全局 MarkService 实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

// 列出成绩
pub async fn list_marks(
    req: HttpRequest,
    query: web::Query<MarkListParams>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.list_marks(&req, query.into_inner()).await
}

// 登记成绩
pub async fn record_mark(
    req: HttpRequest,
    body: web::Json<RecordMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.record_mark(&req, body.into_inner()).await
}

// 获取成绩详情
pub async fn get_mark(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MARK_SERVICE.get_mark(&req, path.0).await
}

// 更新成绩
pub async fn update_mark(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE
        .update_mark(&req, path.0, body.into_inner())
        .await
}

// 删除成绩
pub async fn delete_mark(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    MARK_SERVICE.delete_mark(&req, path.0).await
}

// 配置路由
pub fn configure_mark_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(middlewares::RateLimit::api())
            .service(
                web::resource("")
                    // 列出成绩
                    .route(web::get().to(list_marks))
                    // 登记成绩 - 学年窗口与分数范围在业务层校验
                    .route(
                        web::post()
                            .to(record_mark)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取成绩详情
                    .route(web::get().to(get_mark))
                    // 更新成绩 - 身份字段不可变更
                    .route(
                        web::put()
                            .to(update_mark)
                            .wrap(middlewares::RateLimit::write()),
                    )
                    // 删除成绩 - 平均分在同一事务内重算
                    .route(
                        web::delete()
                            .to(delete_mark)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            ),
    );
}
