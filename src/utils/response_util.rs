use crate::constant::PREFLIGHT_BODY;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// The json envelope of every non pre-flight response.
#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn ok_to(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ResponseBody {
        success: true,
        message: Some(message.to_string()),
        error: None,
    })
}

pub fn error_to(status: StatusCode, error: String) -> HttpResponse {
    HttpResponse::build(status).json(ResponseBody {
        success: false,
        message: None,
        error: Some(error),
    })
}

/// Cors headers are added by the `DefaultHeaders` middleware.
pub fn preflight() -> HttpResponse {
    HttpResponse::Ok().body(PREFLIGHT_BODY)
}
