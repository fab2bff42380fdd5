use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassStudentService;
use crate::models::class_students::requests::{RosterListQuery, RosterQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_class_students(
    service: &ClassStudentService,
    request: &HttpRequest,
    class_id: i64,
    query: RosterQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级必须存在
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    }

    let list_query = RosterListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
    };

    match storage
        .list_class_students_with_pagination(class_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询名册失败: {e}"),
            )),
        ),
    }
}
