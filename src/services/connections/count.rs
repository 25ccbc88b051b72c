use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{COUNT_FAILED_MESSAGE, ConnectionService};
use crate::models::ErrorResponse;
use crate::models::connections::responses::ConnectionCountResponse;

pub async fn count_connections(
    service: &ConnectionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_connections().await {
        Ok(total) => Ok(HttpResponse::Ok().json(ConnectionCountResponse { total })),
        Err(e) => {
            error!("Failed to count connections: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(COUNT_FAILED_MESSAGE)))
        }
    }
}
