pub mod join;
pub mod leave;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_students::requests::RosterQueryParams;
use crate::storage::Storage;

pub struct ClassStudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassStudentService {
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

    // 学生加入班级名册
    pub async fn join_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, req, class_id, student_id).await
    }

    // 学生移出班级名册
    pub async fn leave_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        leave::leave_class(self, req, class_id, student_id).await
    }

    // 列出班级名册
    pub async fn list_class_students(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: RosterQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_class_students(self, req, class_id, query).await
    }
}
