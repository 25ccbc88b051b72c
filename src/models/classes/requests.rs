use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{ProffyError, Result};
use crate::utils::time::to_minutes;

// 课程搜索参数（来自HTTP请求），三个过滤条件都必须提供
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    pub week_day: Option<String>,
    pub subject: Option<String>,
    pub time: Option<String>,
}

// 可用性匹配条件（用于存储层），时间已转换为分钟数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub week_day: i32,
    pub subject: String,
    pub minute: i32,
}

impl TryFrom<ClassQueryParams> for AvailabilityQuery {
    type Error = ProffyError;

    /// 缺少任意过滤条件（或为空字符串）返回 `MissingFilter`，
    /// 格式错误返回 `Validation`
    fn try_from(params: ClassQueryParams) -> Result<Self> {
        let (Some(week_day), Some(subject), Some(time)) = (
            present(params.week_day),
            present(params.subject),
            present(params.time),
        ) else {
            return Err(ProffyError::missing_filter(
                "week_day, subject and time are required",
            ));
        };

        let week_day = parse_week_day(&week_day)?;
        let minute =
            to_minutes(&time).map_err(|e| ProffyError::validation(e.message().to_string()))?;

        Ok(Self {
            week_day,
            subject,
            minute,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_week_day(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|day| validate_week_day(day).ok())
        .ok_or_else(|| ProffyError::validation(format!("Invalid week day '{raw}'")))
}

/// 星期必须在 0（周日）到 6（周六）之间
pub fn validate_week_day(day: i64) -> Result<i32> {
    if (0..=6).contains(&day) {
        Ok(day as i32)
    } else {
        Err(ProffyError::validation(format!(
            "Week day must be between 0 and 6, got {day}"
        )))
    }
}

// 时间表条目，from/to 为 HH:MM
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/class.ts")]
pub struct ScheduleItem {
    #[serde(with = "crate::models::common::numeric::lenient_i64")]
    #[ts(type = "number | string")]
    pub week_day: i64,
    pub from: String,
    pub to: String,
}

// 注册教师并创建课程请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    #[serde(with = "crate::models::common::numeric::lenient_f64")]
    #[ts(type = "number | string")]
    pub cost: f64,
    pub schedule: Vec<ScheduleItem>,
}
