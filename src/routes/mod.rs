pub mod classes;

pub mod connections;

pub use classes::configure_classes_routes;
pub use connections::configure_connections_routes;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use super::*;
    use crate::models::ErrorResponse;
    use crate::models::classes::responses::TeacherClass;
    use crate::models::connections::responses::ConnectionCountResponse;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::{json_error_handler, query_error_handler};

    // 每个测试使用独立的内存数据库
    macro_rules! test_app {
        () => {{
            let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);
            test::init_service(
                App::new()
                    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(web::Data::new(storage))
                    .configure(configure_classes_routes)
                    .configure(configure_connections_routes),
            )
            .await
        }};
    }

    fn ana() -> serde_json::Value {
        json!({
            "name": "Ana",
            "avatar": "https://avatars.example.com/ana.png",
            "whatsapp": "5511999999999",
            "bio": "Math teacher",
            "subject": "Math",
            "cost": 50,
            "schedule": [{ "week_day": 1, "from": "08:00", "to": "10:00" }]
        })
    }

    fn search(week_day: &str, subject: &str, time: &str) -> test::TestRequest {
        test::TestRequest::get().uri(&format!(
            "/classes?week_day={week_day}&subject={subject}&time={time}"
        ))
    }

    #[actix_web::test]
    async fn test_register_then_search() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/classes")
            .set_json(ana())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(test::read_body(resp).await.is_empty());

        let found: Vec<TeacherClass> =
            test::call_and_read_body_json(&app, search("1", "Math", "09:00").to_request()).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ana");
        assert_eq!(found[0].subject, "Math");
        assert_eq!(found[0].cost, 50.0);
        assert_eq!(found[0].whatsapp, "5511999999999");

        for (week_day, subject, time) in [
            ("1", "Math", "10:00"),
            ("1", "Math", "07:59"),
            ("1", "Physics", "09:00"),
            ("1", "Physics", "08:00"),
        ] {
            let found: Vec<TeacherClass> =
                test::call_and_read_body_json(&app, search(week_day, subject, time).to_request()).await;
            assert!(found.is_empty(), "{week_day} {subject} {time} should not match");
        }
    }

    #[actix_web::test]
    async fn test_search_requires_all_filters() {
        let app = test_app!();

        for uri in [
            "/classes",
            "/classes?subject=Math&time=09:00",
            "/classes?week_day=1&time=09:00",
            "/classes?week_day=1&subject=Math",
            "/classes?week_day=1&subject=&time=09:00",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, "Missing filters to search classes");
        }
    }

    #[actix_web::test]
    async fn test_unparseable_query_uses_filter_message() {
        let app = test_app!();

        for uri in [
            "/classes?week_day=1&week_day=2&subject=Math&time=09:00",
            "/classes?week_day=8&subject=Math&time=09:00",
            "/classes?week_day=1&subject=Math&time=24:00",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, "Invalid filters to search classes", "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_failed_registration_is_invisible() {
        let app = test_app!();

        let mut body = ana();
        body["schedule"] = json!([
            { "week_day": 1, "from": "08:00", "to": "10:00" },
            { "week_day": 1, "from": "8 o'clock", "to": "10:00" }
        ]);
        let req = test::TestRequest::post()
            .uri("/classes")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.error, "Unexpected error while creating new class");

        let found: Vec<TeacherClass> =
            test::call_and_read_body_json(&app, search("1", "Math", "09:00").to_request()).await;
        assert!(found.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_class_body() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/classes")
            .set_json(json!({ "name": "Ana" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.error, "Unexpected error while creating new class");
    }

    #[actix_web::test]
    async fn test_connections_counter() {
        let app = test_app!();

        let total: ConnectionCountResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/connections").to_request(),
        )
        .await;
        assert_eq!(total.total, 0);

        let req = test::TestRequest::post()
            .uri("/classes")
            .set_json(ana())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let found: Vec<TeacherClass> =
            test::call_and_read_body_json(&app, search("1", "Math", "09:00").to_request()).await;
        let teacher_id = found[0].id;

        for user_id in [json!(teacher_id), json!(teacher_id.to_string())] {
            let req = test::TestRequest::post()
                .uri("/connections")
                .set_json(json!({ "user_id": user_id }))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::post()
            .uri("/connections")
            .set_json(json!({ "user_id": teacher_id + 100 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.error, "Unexpected error while creating new connection");

        let total: ConnectionCountResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/connections").to_request(),
        )
        .await;
        assert_eq!(total.total, 2);
    }
}
