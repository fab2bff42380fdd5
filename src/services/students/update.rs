use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use super::create::handle_student_write_error;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_name};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(resp) = check_update_fields(&update_data) {
        return Ok(resp);
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(handle_student_write_error(&e.to_string())),
    }
}

/// 字段校验辅助函数
fn check_update_fields(update_data: &UpdateStudentRequest) -> Result<(), HttpResponse> {
    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Some(ref enrollment_number) = update_data.enrollment_number
        && enrollment_number.trim().is_empty()
    {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Enrollment number must not be empty",
        )));
    }
    Ok(())
}
