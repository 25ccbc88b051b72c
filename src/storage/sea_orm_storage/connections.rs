//! 联系记录存储操作

use super::SeaOrmStorage;
use crate::entity::connections::{ActiveModel, Entity as Connections};
use crate::errors::{ProffyError, Result};
use crate::models::connections::entities::Connection;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

impl SeaOrmStorage {
    /// 记录一次联系
    pub async fn record_connection_impl(&self, user_id: i64) -> Result<Connection> {
        let model = ActiveModel {
            user_id: Set(user_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ProffyError::database_operation(format!("创建联系记录失败: {e}")))?;

        Ok(result.into_connection())
    }

    /// 联系总数
    pub async fn count_connections_impl(&self) -> Result<i64> {
        let total = Connections::find()
            .count(&self.db)
            .await
            .map_err(|e| ProffyError::database_operation(format!("查询联系总数失败: {e}")))?;

        Ok(total as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::{CreateClassRequest, ScheduleItem};

    async fn register_teacher(storage: &SeaOrmStorage) -> i64 {
        storage
            .register_class_impl(CreateClassRequest {
                name: "Ana".into(),
                avatar: "https://avatars.example.com/ana.png".into(),
                whatsapp: "5511999999999".into(),
                bio: "Math teacher".into(),
                subject: "Math".into(),
                cost: 50.0,
                schedule: vec![ScheduleItem {
                    week_day: 1,
                    from: "08:00".into(),
                    to: "10:00".into(),
                }],
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_record_and_count() {
        let storage = SeaOrmStorage::in_memory().await;
        assert_eq!(storage.count_connections_impl().await.unwrap(), 0);

        let teacher_id = register_teacher(&storage).await;
        let connection = storage.record_connection_impl(teacher_id).await.unwrap();
        assert_eq!(connection.user_id, teacher_id);
        storage.record_connection_impl(teacher_id).await.unwrap();

        assert_eq!(storage.count_connections_impl().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_teacher_is_rejected() {
        let storage = SeaOrmStorage::in_memory().await;
        let err = storage.record_connection_impl(42).await.unwrap_err();
        assert_eq!(err.code(), "E003");
        assert_eq!(storage.count_connections_impl().await.unwrap(), 0);
    }
}
