//! 服务层测试用的存储替身

use actix_web::HttpResponse;

use crate::errors::{ProffyError, Result};
use crate::models::ErrorResponse;
use crate::models::classes::requests::{AvailabilityQuery, CreateClassRequest};
use crate::models::classes::responses::TeacherClass;
use crate::models::connections::entities::Connection;
use crate::storage::Storage;

/// 任何调用都会 panic，用来证明校验失败时不访问存储
pub(crate) struct UnreachableStorage;

#[async_trait::async_trait]
impl Storage for UnreachableStorage {
    async fn find_teachers(&self, _query: AvailabilityQuery) -> Result<Vec<TeacherClass>> {
        panic!("storage must not be queried")
    }
    async fn register_class(&self, _class: CreateClassRequest) -> Result<i64> {
        panic!("storage must not be queried")
    }
    async fn record_connection(&self, _user_id: i64) -> Result<Connection> {
        panic!("storage must not be queried")
    }
    async fn count_connections(&self) -> Result<i64> {
        panic!("storage must not be queried")
    }
}

/// 模拟数据库不可用
pub(crate) struct OfflineStorage;

pub(crate) const OFFLINE_DETAIL: &str = "connection refused";

#[async_trait::async_trait]
impl Storage for OfflineStorage {
    async fn find_teachers(&self, _query: AvailabilityQuery) -> Result<Vec<TeacherClass>> {
        Err(ProffyError::database_connection(OFFLINE_DETAIL))
    }
    async fn register_class(&self, _class: CreateClassRequest) -> Result<i64> {
        Err(ProffyError::database_connection(OFFLINE_DETAIL))
    }
    async fn record_connection(&self, _user_id: i64) -> Result<Connection> {
        Err(ProffyError::database_connection(OFFLINE_DETAIL))
    }
    async fn count_connections(&self) -> Result<i64> {
        Err(ProffyError::database_connection(OFFLINE_DETAIL))
    }
}

/// 读取响应体中的 `error` 字段
pub(crate) async fn error_message(resp: HttpResponse) -> String {
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    assert!(
        !String::from_utf8_lossy(&body).contains(OFFLINE_DETAIL),
        "storage detail leaked into the response"
    );
    serde_json::from_slice::<ErrorResponse>(&body).unwrap().error
}
