//! 計算配置

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{HolidayCalendar, Result, WorktimeError};

/// 預設投影週數（雙週）
pub const DEFAULT_PROJECTION_WEEKS: u32 = 2;

/// 休假與工時計算配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorktimeConfig {
    /// 分配投影週數（每週分鐘數乘上此值）
    pub projection_weeks: u32,

    /// 單次計算允許的最大天數（None 表示不限制）
    pub max_range_days: Option<u32>,

    /// 國定假日（不計入休假天數）
    pub holidays: Vec<NaiveDate>,
}

impl WorktimeConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            projection_weeks: DEFAULT_PROJECTION_WEEKS,
            max_range_days: None,
            holidays: Vec::new(),
        }
    }

    /// 從 JSON 字串載入並驗證
    ///
    /// ```
    /// # use worktime_core::WorktimeConfig;
    /// let config = WorktimeConfig::from_json_str(r#"{"projection_weeks": 3}"#).unwrap();
    /// assert_eq!(config.projection_weeks, 3);
    /// assert!(config.holidays.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 從 JSON 檔案載入並驗證
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 建構器模式：設置投影週數
    pub fn with_projection_weeks(mut self, weeks: u32) -> Self {
        self.projection_weeks = weeks;
        self
    }

    /// 建構器模式：設置最大天數
    pub fn with_max_range_days(mut self, days: u32) -> Self {
        self.max_range_days = Some(days);
        self
    }

    /// 建構器模式：設置國定假日
    pub fn with_holidays(mut self, holidays: Vec<NaiveDate>) -> Self {
        self.holidays = holidays;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.projection_weeks == 0 {
            return Err(WorktimeError::ConfigError(
                "projection_weeks 必須至少為 1".to_string(),
            ));
        }

        if self.max_range_days == Some(0) {
            return Err(WorktimeError::ConfigError(
                "max_range_days 必須至少為 1".to_string(),
            ));
        }

        Ok(())
    }

    /// 以配置的假日建立日曆
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::new("CONFIG".to_string()).with_holidays(self.holidays.clone())
    }
}

impl Default for WorktimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorktimeConfig::default();

        assert_eq!(config.projection_weeks, DEFAULT_PROJECTION_WEEKS);
        assert_eq!(config.max_range_days, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = WorktimeConfig::new()
            .with_projection_weeks(4)
            .with_max_range_days(366)
            .with_holidays(vec![NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()]);

        assert_eq!(config.projection_weeks, 4);
        assert_eq!(config.max_range_days, Some(366));
        assert!(config
            .holiday_calendar()
            .is_holiday(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    }

    #[test]
    fn test_from_json_with_holidays() {
        let config = WorktimeConfig::from_json_str(
            r#"{"max_range_days": 31, "holidays": ["2024-12-25", "2024-12-26"]}"#,
        )
        .unwrap();

        assert_eq!(config.projection_weeks, DEFAULT_PROJECTION_WEEKS);
        assert_eq!(config.max_range_days, Some(31));
        assert_eq!(config.holidays.len(), 2);
    }

    #[test]
    fn test_zero_projection_rejected() {
        let err = WorktimeConfig::from_json_str(r#"{"projection_weeks": 0}"#).unwrap_err();
        assert!(matches!(err, WorktimeError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = WorktimeConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, WorktimeError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = WorktimeConfig::from_json_file("/nonexistent/worktime.json").unwrap_err();
        assert!(matches!(err, WorktimeError::Io(_)));
    }
}
