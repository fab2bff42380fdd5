use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(resp) = check_student_fields(&student_data) {
        return Ok(resp);
    }

    // 创建学生
    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created successfully", student.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Ok(handle_student_write_error(&e.to_string())),
    }
}

/// 字段校验辅助函数
fn check_student_fields(student_data: &CreateStudentRequest) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_name(&student_data.name) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_email(&student_data.email) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if student_data.enrollment_number.trim().is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Enrollment number must not be empty",
        )));
    }
    Ok(())
}

/// 错误响应辅助函数
pub(super) fn handle_student_write_error(e: &str) -> HttpResponse {
    let msg = format!("Student write failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EmailAlreadyExists,
            "Email or enrollment number already in use",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
