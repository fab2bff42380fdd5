use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassStudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn join_class(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级和学生必须存在
    if let Err(resp) = check_association_targets(&storage, class_id, student_id).await {
        return Ok(resp);
    }

    // 重复加入直接拒绝
    match storage.get_class_student(class_id, student_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::StudentAlreadyInClass,
                "Student is already enrolled in this class",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check roster entry: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking roster",
                )),
            );
        }
    }

    match storage.add_student_to_class(class_id, student_id).await {
        Ok(entry) => {
            info!("Student {} joined class {}", student_id, class_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(entry, "Student enrolled successfully")))
        }
        Err(e) => {
            let msg = format!("Enrollment failed: {e}");
            error!("{}", msg);
            // 并发写入时唯一索引兜底
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentAlreadyInClass,
                    "Student is already enrolled in this class",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        msg,
                    )),
                )
            }
        }
    }
}

/// 校验班级和学生存在的辅助函数
pub(super) async fn check_association_targets(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    student_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to get class by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching class",
                )),
            );
        }
    }

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching student",
                )),
            )
        }
    }
}
