use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_students::requests::RosterQueryParams;
use crate::models::classes::requests::{
    ClassQueryParams, CreateClassRequest, GradeSheetParams, UpdateClassRequest,
};
use crate::services::{ClassService, ClassStudentService};
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局服务实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static CLASS_STUDENT_SERVICE: Lazy<ClassStudentService> =
    Lazy::new(ClassStudentService::new_lazy);

// 列出班级
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

// 创建班级
pub async fn create_class(
    req: HttpRequest,
    body: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(&req, body.into_inner()).await
}

// 获取班级详情
pub async fn get_class(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, path.0).await
}

// 更新班级
pub async fn update_class(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, path.0, body.into_inner())
        .await
}

// 删除班级
pub async fn delete_class(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, path.0).await
}

// 列出班级名册
pub async fn list_class_students(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<RosterQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .list_class_students(&req, path.0, query.into_inner())
        .await
}

// 学生加入班级
pub async fn add_student_to_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .join_class(&req, class_id.0, student_id.0)
        .await
}

// 学生移出班级
pub async fn remove_student_from_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_STUDENT_SERVICE
        .leave_class(&req, class_id.0, student_id.0)
        .await
}

// 获取班级学科成绩单
pub async fn get_grade_sheet(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<GradeSheetParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .get_grade_sheet(&req, path.0, query.subject_id)
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RateLimit::api())
            .service(
                web::resource("")
                    // 列出班级
                    .route(web::get().to(list_classes))
                    // 创建班级
                    .route(
                        web::post()
                            .to(create_class)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取班级详情
                    .route(web::get().to(get_class))
                    // 更新班级
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(middlewares::RateLimit::write()),
                    )
                    // 删除班级
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            // 班级名册
            .service(web::resource("/{id}/students").route(web::get().to(list_class_students)))
            .service(
                web::resource("/{id}/students/{student_id}")
                    // 加入名册
                    .route(
                        web::post()
                            .to(add_student_to_class)
                            .wrap(middlewares::RateLimit::write()),
                    )
                    // 移出名册
                    .route(
                        web::delete()
                            .to(remove_student_from_class)
                            .wrap(middlewares::RateLimit::write()),
                    ),
            )
            // 班级学科成绩单
            .service(web::resource("/{id}/grade-sheet").route(web::get().to(get_grade_sheet))),
    );
}
