//! # Worktime Core
//!
//! 核心資料模型與類型定義

pub mod allocation;
pub mod config;
pub mod holiday;
pub mod pattern;
pub mod range;
pub mod request;

// Re-export 主要類型
pub use allocation::{AllocationRecord, PersonTimeRecord, WeeklyMinutes};
pub use config::{WorktimeConfig, DEFAULT_PROJECTION_WEEKS};
pub use holiday::HolidayCalendar;
pub use pattern::WorkingPattern;
pub use range::{iterate, DateRange, DayIter};
pub use request::VacationRequest;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;

/// Worktime 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum WorktimeError {
    #[error("無效的日期區間: 開始日 {start} 晚於結束日 {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("工作權重不可為負: {weekday} = {weight}")]
    NegativeWeight { weekday: Weekday, weight: Decimal },

    #[error("日期區間過長: {days} 天（上限 {limit} 天）")]
    RangeTooLong { days: u64, limit: u32 },

    #[error("數值溢出: {0}")]
    Overflow(String),

    #[error("配置錯誤: {0}")]
    ConfigError(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O 錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorktimeError>;
