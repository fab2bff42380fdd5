use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::events::requests::{EventListParams, EventListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_events(
    service: &EventService,
    request: &HttpRequest,
    query: EventListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = EventListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        from: query.from,
        to: query.to,
    };

    match storage.list_events_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询事件列表失败: {e}"),
            )),
        ),
    }
}
