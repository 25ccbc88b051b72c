//! 时间编解码
//!
//! 将 `HH:MM` 形式的时刻转换为距离午夜的分钟数，匹配与存储都只使用分钟数。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ProffyError, Result};

/// 一天的分钟数，也是时段结束分钟的上限（开区间）
pub const MINUTES_PER_DAY: i32 = 24 * 60;

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("Invalid time regex")
});

/// 将 `HH:MM` 转换为分钟数：`HH * 60 + MM`
///
/// 小时允许一位或两位数字（`8:00` 与 `08:00` 等价），格式不合法时返回
/// [`ProffyError::TimeFormat`]，不会产生无意义的数值。
pub fn to_minutes(time: &str) -> Result<i32> {
    let trimmed = time.trim();
    let caps = TIME_RE
        .captures(trimmed)
        .ok_or_else(|| ProffyError::time_format(format!("Invalid time '{time}', expected HH:MM")))?;

    // 正则已限定为数字，解析不会失败
    let hours: i32 = caps[1]
        .parse()
        .map_err(|_| ProffyError::time_format(format!("Invalid hour in '{time}'")))?;
    let minutes: i32 = caps[2]
        .parse()
        .map_err(|_| ProffyError::time_format(format!("Invalid minute in '{time}'")))?;

    Ok(hours * 60 + minutes)
}

/// 解析时段结束时刻，额外允许 `24:00` 表示当天结束（1440）
///
/// 查询时刻仍然只接受 [`to_minutes`] 的范围。
pub fn to_end_minutes(time: &str) -> Result<i32> {
    if time.trim() == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    to_minutes(time)
}

/// 将分钟数格式化为 `HH:MM`，主要用于日志输出
pub fn from_minutes(minutes: i32) -> String {
    let minutes = minutes.clamp(0, MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
