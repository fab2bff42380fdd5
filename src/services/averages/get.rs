use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AverageService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取某个 (student, subject) 组合的期末平均分
/// GET /averages/{student_id}/{subject_id}
pub async fn get_average(
    service: &AverageService,
    request: &HttpRequest,
    student_id: i64,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_final_average(student_id, subject_id).await {
        Ok(Some(average)) => Ok(HttpResponse::Ok().json(ApiResponse::success(average, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AverageNotFound,
            "No final average for this student and subject",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询平均分失败: {e}"),
            )),
        ),
    }
}
