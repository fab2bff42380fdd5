use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TimetableService;
use crate::models::timetables::requests::{TimetableListParams, TimetableListQuery};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_weekday;

pub async fn list_timetable_slots(
    service: &TimetableService,
    request: &HttpRequest,
    query: TimetableListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(weekday) = query.weekday
        && let Err(msg) = validate_weekday(weekday)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let list_query = TimetableListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        class_id: query.class_id,
        teacher_id: query.teacher_id,
        weekday: query.weekday,
    };

    match storage
        .list_timetable_slots_with_pagination(list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程表失败: {e}"),
            )),
        ),
    }
}
