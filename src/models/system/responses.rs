use serde::Serialize;

// 系统状态响应
#[derive(Debug, Serialize)]
pub struct SystemStatusResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
}
