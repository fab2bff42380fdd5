use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::averages::requests::AverageListParams;
use crate::services::AverageService;
use crate::utils::{SafeStudentIdI64, SafeSubjectIdI64};

// 懒加载的全局 AverageService 实例
static AVERAGE_SERVICE: Lazy<AverageService> = Lazy::new(AverageService::new_lazy);

// 列出平均分
pub async fn list_averages(
    req: HttpRequest,
    query: web::Query<AverageListParams>,
) -> ActixResult<HttpResponse> {
    AVERAGE_SERVICE.list_averages(&req, query.into_inner()).await
}

// 获取某个 (student, subject) 组合的平均分
pub async fn get_average(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    AVERAGE_SERVICE
        .get_average(&req, student_id.0, subject_id.0)
        .await
}

// 配置路由
//
// 平均分是派生状态，只暴露读接口；写入全部由成绩模块触发。
pub fn configure_average_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/averages")
            .wrap(middlewares::RateLimit::api())
            .service(web::resource("").route(web::get().to(list_averages)))
            .service(
                web::resource("/{student_id}/{subject_id}").route(web::get().to(get_average)),
            ),
    );
}
