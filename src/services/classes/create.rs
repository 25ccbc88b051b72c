use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{CREATE_FAILED_MESSAGE, ClassService};
use crate::models::ErrorResponse;
use crate::models::classes::requests::CreateClassRequest;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let subject = class_data.subject.clone();

    match storage.register_class(class_data).await {
        Ok(teacher_id) => {
            info!("Teacher {} registered with class {}", teacher_id, subject);
            Ok(HttpResponse::Created().finish())
        }
        Err(e) => {
            // 不向调用方暴露失败的具体步骤
            error!("Class registration failed: {}", e);
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
    use crate::models::classes::requests::ScheduleItem;
    use crate::services::test_storage::{OfflineStorage, error_message};

    fn class_request() -> CreateClassRequest {
        CreateClassRequest {
            name: "Ana".into(),
            avatar: "https://example.com/ana.png".into(),
            whatsapp: "5511999999999".into(),
            bio: "Math teacher".into(),
            subject: "Math".into(),
            cost: 50.0,
            schedule: vec![ScheduleItem {
                week_day: 1,
                from: "08:00".into(),
                to: "12:00".into(),
            }],
        }
    }

    #[actix_web::test]
    async fn test_storage_failure_returns_static_message() {
        let service = ClassService::with_storage(Arc::new(OfflineStorage));
        let req = TestRequest::default().to_http_request();

        let resp = service.create_class(&req, class_request()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, CREATE_FAILED_MESSAGE);
    }
}
