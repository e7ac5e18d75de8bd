//! 國定假日日曆

use chrono::NaiveDate;
use serde::Serialize;

use crate::DateRange;

/// 國定假日日曆
///
/// 假日清單保持排序且不重複。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HolidayCalendar {
    /// 日曆ID
    pub calendar_id: String,

    /// 節假日列表
    holidays: Vec<NaiveDate>,
}

impl HolidayCalendar {
    /// 創建空的假日日曆
    pub fn new(calendar_id: String) -> Self {
        Self {
            calendar_id,
            holidays: Vec::new(),
        }
    }

    /// 建構器模式：設置節假日
    pub fn with_holidays(mut self, mut holidays: Vec<NaiveDate>) -> Self {
        holidays.sort();
        holidays.dedup();
        self.holidays = holidays;
        self
    }

    /// 添加節假日
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if let Err(pos) = self.holidays.binary_search(&date) {
            self.holidays.insert(pos, date);
        }
    }

    /// 檢查是否為節假日
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.binary_search(&date).is_ok()
    }

    /// 區間內的節假日
    pub fn holidays_in(&self, range: &DateRange) -> impl Iterator<Item = NaiveDate> + '_ {
        let start = self.holidays.partition_point(|d| *d < range.start());
        let end = self.holidays.partition_point(|d| *d <= range.end());
        self.holidays[start..end].iter().copied()
    }

    pub fn holidays(&self) -> &[NaiveDate] {
        &self.holidays
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
