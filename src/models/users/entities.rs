use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师资料（注册后不再修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/user.ts")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    // 头像 URL
    pub avatar: String,
    // WhatsApp 联系方式
    pub whatsapp: String,
    pub bio: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
