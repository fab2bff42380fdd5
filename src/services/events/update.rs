use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use crate::models::events::requests::UpdateEventRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_name;

pub async fn update_event(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
    update_data: UpdateEventRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Some(ref title) = update_data.title
        && let Err(msg) = validate_name(title)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 起止时间校验：合并已有值后判断
    let existing = match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EventNotFound,
                "Event not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询事件失败: {e}"),
                )),
            );
        }
    };

    let starts_at = update_data.starts_at.unwrap_or(existing.starts_at);
    let ends_at = update_data.ends_at.unwrap_or(existing.ends_at);
    if starts_at >= ends_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "Event must start before it ends",
        )));
    }

    match storage.update_event(event_id, update_data).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(event, "Event updated successfully"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => {
            let msg = format!("Event update failed: {e}");
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
