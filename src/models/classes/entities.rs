use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程：某位教师提供的科目及价格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub subject: String,
    // 每小时价格
    pub cost: f64,
    // 所属教师
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 每周可用时段，[from_minute, to_minute) 半开区间
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/class.ts")]
pub struct ScheduleWindow {
    pub id: i64,
    pub class_id: i64,
    // 0 = 周日 ... 6 = 周六
    pub week_day: i32,
    pub from_minute: i32,
    pub to_minute: i32,
}
