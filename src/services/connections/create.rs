use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{CREATE_FAILED_MESSAGE, ConnectionService};
use crate::models::ErrorResponse;
use crate::models::connections::requests::CreateConnectionRequest;

pub async fn create_connection(
    service: &ConnectionService,
    request: &HttpRequest,
    connection_data: CreateConnectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.record_connection(connection_data.user_id).await {
        Ok(connection) => {
            info!("Connection {} recorded for teacher {}", connection.id, connection.user_id);
            Ok(HttpResponse::Created().finish())
        }
        Err(e) => {
            error!(
                "Failed to record connection for teacher {}: {}",
                connection_data.user_id, e
            );
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(CREATE_FAILED_MESSAGE)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    use super::*;
    use crate::services::test_storage::{OfflineStorage, error_message};

    #[actix_web::test]
    async fn test_record_failure_returns_static_message() {
        let service = ConnectionService::with_storage(Arc::new(OfflineStorage));
        let req = TestRequest::default().to_http_request();

        let resp = service
            .create_connection(&req, CreateConnectionRequest { user_id: 7 })
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, CREATE_FAILED_MESSAGE);
    }
}
