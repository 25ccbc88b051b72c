use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classes::requests::{ClassQueryParams, CreateClassRequest};
use crate::services::ClassService;
use crate::services::classes::{CREATE_FAILED_MESSAGE, INVALID_FILTERS_MESSAGE};
use crate::utils::{json_error_handler_with, query_error_handler_with};

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/classes")
            // 查询串本身无法解析（如重复的 week_day）按非法过滤条件处理
            .app_data(
                web::QueryConfig::default()
                    .error_handler(query_error_handler_with(INVALID_FILTERS_MESSAGE)),
            )
            // 请求体格式错误同样视为创建失败
            .app_data(
                web::JsonConfig::default().error_handler(json_error_handler_with(CREATE_FAILED_MESSAGE)),
            )
            .route(web::get().to(list_classes))
            .route(web::post().to(create_class)),
    );
}
