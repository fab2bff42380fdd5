pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 获取系统状态
    pub async fn get_status(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        status::get_status(req).await
    }
}
