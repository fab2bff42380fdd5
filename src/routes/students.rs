use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::averages::requests::AverageListParams;
use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::{AverageService, StudentService};
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static AVERAGE_SERVICE: Lazy<AverageService> = Lazy::new(AverageService::new_lazy);

// 列出学生
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

// 创建学生
pub async fn create_student(
    req: HttpRequest,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(&req, body.into_inner()).await
}

// 获取学生详情
pub async fn get_student(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, path.0).await
}

// 更新学生
pub async fn update_student(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, path.0, body.into_inner())
        .await
}

// 删除学生
pub async fn delete_student(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, path.0).await
}

// 获取学生的全部平均分
pub async fn list_student_averages(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<AverageListParams>,
) -> ActixResult<HttpResponse> {
    AVERAGE_SERVICE
        .list_student_averages(&req, path.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RateLimit::api())
            .service(
                web::resource("")
                    // 列出学生
                    .route(web::get().to(list_students))
                    // 创建学生
                    .route(
                        web::post()
                            .to(create_student)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取学生详情
                    .route(web::get().to(get_student))
                    // 更新学生
                    .route(
                        web::put()
                            .to(update_student)
                            .wrap(middlewares::RateLimit::write()),
                    )
                    // 删除学生
                    .route(
                        web::delete()
                            .to(delete_student)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            // 学生平均分（派生状态，只读）
            .service(web::resource("/{id}/averages").route(web::get().to(list_student_averages))),
    );
}
