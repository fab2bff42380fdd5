pub mod delete;
pub mod get;
pub mod list;
pub mod record;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::marks::requests::{MarkListParams, RecordMarkRequest, UpdateMarkRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::AcademicYearWindow;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 登记成绩
    pub async fn record_mark(
        &self,
        req: &HttpRequest,
        mark_data: RecordMarkRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_mark(self, req, mark_data).await
    }

    // 根据成绩 ID 获取成绩
    pub async fn get_mark(&self, req: &HttpRequest, mark_id: i64) -> ActixResult<HttpResponse> {
        get::get_mark(self, req, mark_id).await
    }

    // 获取成绩列表
    pub async fn list_marks(
        &self,
        request: &HttpRequest,
        query: MarkListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_marks(self, request, query).await
    }

    // 更新成绩
    pub async fn update_mark(
        &self,
        req: &HttpRequest,
        mark_id: i64,
        update_data: UpdateMarkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_mark(self, req, mark_id, update_data).await
    }

    // 删除成绩
    pub async fn delete_mark(&self, req: &HttpRequest, mark_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_mark(self, req, mark_id).await
    }
}

/// 学年窗口校验辅助函数
///
/// 窗口从配置的边界月/日和当前日期推出，评估日期必须落在窗口内。
pub(crate) fn check_academic_year_window(
    assessment_date: chrono::NaiveDate,
) -> Result<(), HttpResponse> {
    let config = AppConfig::get();
    let today = chrono::Utc::now().date_naive();

    let window = match AcademicYearWindow::for_date(today, &config.academic_year) {
        Ok(window) => window,
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("学年窗口配置无效: {e}"),
                )),
            );
        }
    };

    if let Err(violation) = window.check(assessment_date) {
        return Err(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::MarkOutOfWindow,
            violation.message(),
        )));
    }

    Ok(())
}
