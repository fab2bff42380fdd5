//! 路径参数提取器
//!
//! 从路径中提取并校验 i64 ID，非法值直接返回 400 的统一响应，
//! 避免每个 handler 重复解析。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义按名称提取路径 ID 的提取器
macro_rules! safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|v| v.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let resp = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid path parameter: ", $param),
                        ));
                        Err(actix_web::error::InternalError::from_response(
                            concat!("invalid ", $param),
                            resp,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

safe_id_extractor!(SafeIDI64, "id");
safe_id_extractor!(SafeStudentIdI64, "student_id");
safe_id_extractor!(SafeSubjectIdI64, "subject_id");
