use std::sync::Arc;

use crate::models::{
    classes::{
        requests::{AvailabilityQuery, CreateClassRequest},
        responses::TeacherClass,
    },
    connections::entities::Connection,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 按星期、科目、时间匹配有空的教师
    async fn find_teachers(&self, query: AvailabilityQuery) -> Result<Vec<TeacherClass>>;
    // 在同一事务中创建教师、课程及时间表，返回教师ID
    async fn register_class(&self, class: CreateClassRequest) -> Result<i64>;

    /// 联系记录方法
    // 记录一次学生联系教师
    async fn record_connection(&self, user_id: i64) -> Result<Connection>;
    // 联系总数
    async fn count_connections(&self) -> Result<i64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
