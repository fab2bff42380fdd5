use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{MarkService, check_academic_year_window};
use crate::models::marks::requests::RecordMarkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{validate_assessment_type, validate_grade};

pub async fn record_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_data: RecordMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验：评估类型与分数范围
    if let Err(msg) = validate_assessment_type(&mark_data.assessment_type) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_grade(mark_data.grade) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::InvalidGrade, msg)));
    }

    // 学年窗口校验
    if let Err(resp) = check_academic_year_window(mark_data.assessment_date) {
        return Ok(resp);
    }

    // 关联实体校验
    if let Err(resp) = check_mark_references(&storage, &mark_data).await {
        return Ok(resp);
    }

    // 登记成绩并在同一事务内重算平均分
    match storage.create_mark(mark_data).await {
        Ok(mark) => {
            info!(
                "Mark {} recorded for student {} subject {}",
                mark.id, mark.student_id, mark.subject_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(mark, "Mark recorded successfully")))
        }
        Err(e) => {
            let msg = format!("Mark recording failed: {e}");
            error!("{}", msg);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    msg,
                )),
            )
        }
    }
}

/// 关联实体校验辅助函数：学生、学科、教师必须存在
async fn check_mark_references(
    storage: &Arc<dyn Storage>,
    mark_data: &RecordMarkRequest,
) -> Result<(), HttpResponse> {
    match storage.get_student_by_id(mark_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            return Err(internal_reference_error());
        }
    }

    match storage.get_subject_by_id(mark_data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            error!("Failed to get subject by id: {}", e);
            return Err(internal_reference_error());
        }
    }

    match storage.get_teacher_by_id(mark_data.teacher_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Failed to get teacher by id: {}", e);
            Err(internal_reference_error())
        }
    }
}

fn internal_reference_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error while checking mark references",
    ))
}
