use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MarkService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除成绩并在同一事务内重算平均分；
    // 组合最后一条成绩删除后平均分行一并移除
    match storage.delete_mark(mark_id).await {
        Ok(true) => {
            info!("Mark {} deleted successfully", mark_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Mark deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MarkNotFound,
            "Mark not found",
        ))),
        Err(e) => {
            error!("Failed to delete mark {}: {}", mark_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("删除成绩失败: {e}"),
                )),
            )
        }
    }
}
