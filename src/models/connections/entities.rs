use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生联系教师的记录，只追加不删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/connection.ts")]
pub struct Connection {
    pub id: i64,
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
