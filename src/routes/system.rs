use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// 获取系统状态
pub async fn get_status(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_status(&req).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .wrap(middlewares::RateLimit::api())
            .service(web::resource("/status").route(web::get().to(get_status))),
    );
}
