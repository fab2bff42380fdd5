use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassStudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn leave_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.remove_student_from_class(class_id, student_id).await {
        Ok(true) => {
            info!("Student {} left class {}", student_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student removed from class successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotInClass,
            "Student is not enrolled in this class",
        ))),
        Err(e) => {
            error!(
                "Failed to remove student {} from class {}: {}",
                student_id, class_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("移出班级失败: {e}"),
                )),
            )
        }
    }
}
