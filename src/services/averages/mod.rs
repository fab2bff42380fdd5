pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::averages::requests::AverageListParams;
use crate::storage::Storage;

pub struct AverageService {
    storage: Option<Arc<dyn Storage>>,
}

impl AverageService {
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

    // 获取某个 (student, subject) 组合的平均分
    pub async fn get_average(
        &self,
        req: &HttpRequest,
        student_id: i64,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_average(self, req, student_id, subject_id).await
    }

    // 获取平均分列表
    pub async fn list_averages(
        &self,
        request: &HttpRequest,
        query: AverageListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_averages(self, request, query).await
    }

    // 获取某个学生的全部平均分
    pub async fn list_student_averages(
        &self,
        request: &HttpRequest,
        student_id: i64,
        query: AverageListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_student_averages(self, request, student_id, query).await
    }
}
