use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EventService;
use crate::models::events::requests::CreateEventRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_name;

pub async fn create_event(
    service: &EventService,
    request: &HttpRequest,
    event_data: CreateEventRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(msg) = validate_name(&event_data.title) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if event_data.starts_at >= event_data.ends_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "Event must start before it ends",
        )));
    }

    // 创建事件
    match storage.create_event(event_data).await {
        Ok(event) => {
            info!("Event {} created successfully", event.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(event, "Event created successfully")))
        }
        Err(e) => {
            let msg = format!("Event creation failed: {e}");
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
