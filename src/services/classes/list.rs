use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use super::{
    ClassService, INVALID_FILTERS_MESSAGE, MISSING_FILTERS_MESSAGE, SEARCH_FAILED_MESSAGE,
};
use crate::errors::ProffyError;
use crate::models::ErrorResponse;
use crate::models::classes::requests::{AvailabilityQuery, ClassQueryParams};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    // 过滤条件不完整时不访问存储
    let query = match AvailabilityQuery::try_from(query) {
        Ok(query) => query,
        Err(e) => return Ok(handle_filter_error(&e)),
    };

    let storage = service.get_storage(request);

    match storage.find_teachers(query).await {
        Ok(classes) => {
            debug!("Class search returned {} result(s)", classes.len());
            Ok(HttpResponse::Ok().json(classes))
        }
        Err(e) => {
            error!("Class search failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(SEARCH_FAILED_MESSAGE)))
        }
    }
}

/// 错误响应辅助函数
fn handle_filter_error(e: &ProffyError) -> HttpResponse {
    debug!("Rejected class search: {}", e);
    match e {
        ProffyError::MissingFilter(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(MISSING_FILTERS_MESSAGE))
        }
        _ => HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_FILTERS_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    use super::*;
    use crate::services::test_storage::{OfflineStorage, UnreachableStorage, error_message};

    fn params(week_day: Option<&str>, subject: Option<&str>, time: Option<&str>) -> ClassQueryParams {
        ClassQueryParams {
            week_day: week_day.map(String::from),
            subject: subject.map(String::from),
            time: time.map(String::from),
        }
    }

    #[actix_web::test]
    async fn test_missing_filter_skips_storage() {
        let service = ClassService::with_storage(Arc::new(UnreachableStorage));
        let req = TestRequest::default().to_http_request();

        for query in [
            params(None, Some("Math"), Some("09:00")),
            params(Some("1"), None, Some("09:00")),
            params(Some("1"), Some("Math"), None),
        ] {
            let resp = service.list_classes(&req, query).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(error_message(resp).await, MISSING_FILTERS_MESSAGE);
        }
    }

    #[actix_web::test]
    async fn test_malformed_filter_skips_storage() {
        let service = ClassService::with_storage(Arc::new(UnreachableStorage));
        let req = TestRequest::default().to_http_request();

        let resp = service
            .list_classes(&req, params(Some("1"), Some("Math"), Some("25:00")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, INVALID_FILTERS_MESSAGE);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_not_leaked() {
        let service = ClassService::with_storage(Arc::new(OfflineStorage));
        let req = TestRequest::default().to_http_request();

        let resp = service
            .list_classes(&req, params(Some("1"), Some("Math"), Some("09:00")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_message(resp).await, SEARCH_FAILED_MESSAGE);
    }
}
