use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ErrorResponse;

/// 查询参数解析失败时统一返回 `{ "error": ... }`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    debug!("Query parameter error: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("Invalid query parameters"));
    InternalError::from_response(err, response).into()
}

/// 为单个资源定制查询参数解析失败时的错误信息
pub fn query_error_handler_with(
    message: &'static str,
) -> impl Fn(QueryPayloadError, &HttpRequest) -> Error + Send + Sync + 'static {
    move |err, _req| {
        debug!("Query parameter error: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
        InternalError::from_response(err, response).into()
    }
}

/// JSON 请求体解析失败时统一返回 `{ "error": ... }`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    debug!("JSON payload error: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("Invalid request body"));
    InternalError::from_response(err, response).into()
}

/// 为单个资源定制 JSON 解析失败时的错误信息
pub fn json_error_handler_with(
    message: &'static str,
) -> impl Fn(JsonPayloadError, &HttpRequest) -> Error + Send + Sync + 'static {
    move |err, _req| {
        debug!("JSON payload error: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
        InternalError::from_response(err, response).into()
    }
}
