use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AverageService;
use crate::models::averages::requests::{AverageListParams, AverageListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_averages(
    service: &AverageService,
    request: &HttpRequest,
    query: AverageListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AverageListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
        subject_id: query.subject_id,
    };

    match storage.list_final_averages_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询平均分列表失败: {e}"),
            )),
        ),
    }
}

/// 获取某个学生的全部平均分
/// GET /students/{id}/averages
pub async fn list_student_averages(
    service: &AverageService,
    request: &HttpRequest,
    student_id: i64,
    query: AverageListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生必须存在
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    let list_query = AverageListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: Some(student_id),
        subject_id: query.subject_id,
    };

    match storage.list_final_averages_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询平均分列表失败: {e}"),
            )),
        ),
    }
}
