use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MarkService;
use crate::models::marks::requests::{MarkListParams, MarkListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_marks(
    service: &MarkService,
    request: &HttpRequest,
    query: MarkListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = MarkListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
        subject_id: query.subject_id,
        teacher_id: query.teacher_id,
    };

    match storage.list_marks_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩列表失败: {e}"),
            )),
        ),
    }
}
