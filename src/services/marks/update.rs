use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{MarkService, check_academic_year_window};
use crate::models::marks::requests::UpdateMarkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_assessment_type, validate_grade};

pub async fn update_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_id: i64,
    update_data: UpdateMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验：只校验提交的字段
    if let Some(ref assessment_type) = update_data.assessment_type
        && let Err(msg) = validate_assessment_type(assessment_type)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Some(grade) = update_data.grade
        && let Err(msg) = validate_grade(grade)
    {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::InvalidGrade, msg)));
    }

    // 新评估日期同样要落在学年窗口内
    if let Some(assessment_date) = update_data.assessment_date
        && let Err(resp) = check_academic_year_window(assessment_date)
    {
        return Ok(resp);
    }

    // 更新成绩并在同一事务内重算平均分
    match storage.update_mark(mark_id, update_data).await {
        Ok(Some(mark)) => {
            info!("Mark {} updated successfully", mark.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(mark, "Mark updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MarkNotFound,
            "Mark not found",
        ))),
        Err(e) => {
            let msg = format!("Mark update failed: {e}");
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
