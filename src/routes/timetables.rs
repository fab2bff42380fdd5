use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::timetables::requests::{
    CreateTimetableSlotRequest, TimetableListParams, UpdateTimetableSlotRequest,
};
use crate::services::TimetableService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TimetableService 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

// 列出课程表条目
pub async fn list_timetable_slots(
    req: HttpRequest,
    query: web::Query<TimetableListParams>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .list_timetable_slots(&req, query.into_inner())
        .await
}

// 创建课程表条目
pub async fn create_timetable_slot(
    req: HttpRequest,
    body: web::Json<CreateTimetableSlotRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_timetable_slot(&req, body.into_inner())
        .await
}

// 获取课程表条目详情
pub async fn get_timetable_slot(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.get_timetable_slot(&req, path.0).await
}

// 更新课程表条目
pub async fn update_timetable_slot(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateTimetableSlotRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .update_timetable_slot(&req, path.0, body.into_inner())
        .await
}

// 删除课程表条目
pub async fn delete_timetable_slot(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_timetable_slot(&req, path.0).await
}

// 配置路由
pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/timetables")
            .wrap(middlewares::RateLimit::api())
            .service(
                web::resource("")
                    // 列出课程表
                    .route(web::get().to(list_timetable_slots))
                    // 创建条目 - 冲突检测在存储层事务内执行
                    .route(
                        web::post()
                            .to(create_timetable_slot)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_timetable_slot))
                    .route(
                        web::put()
                            .to(update_timetable_slot)
                            .wrap(middlewares::RateLimit::write()),
                    )
                    .route(
                        web::delete()
                            .to(delete_timetable_slot)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            ),
    );
}
