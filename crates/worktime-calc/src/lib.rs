//! # Worktime Calculation Engine
//!
//! 休假天數與工時彙總計算

pub mod aggregation;
pub mod vacation;

// Re-export 主要類型
pub use aggregation::{
    calculate_working_load, time_left, time_left_by_id, total_allocated, total_allocations,
    AllocationAggregator,
};
pub use vacation::{calculate_total_vacation_days, VacationDayCalculator};

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;
use worktime_core::DateRange;

/// 單日扣除類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChargeKind {
    /// 上班日，扣除該日權重
    Working,
    /// 平日但該人不上班
    NonWorkingDay,
    /// 週末
    Weekend,
    /// 國定假日
    Holiday,
}

/// 單日扣除明細
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCharge {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub weight: Decimal,
    pub kind: ChargeKind,
}

impl DayCharge {
    /// 是否實際扣除休假
    pub fn is_charged(&self) -> bool {
        self.kind == ChargeKind::Working
    }
}

/// 休假計算明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationBreakdown {
    /// 計算區間
    pub range: DateRange,

    /// 逐日明細（依日期排序）
    pub days: Vec<DayCharge>,

    /// 總扣除天數
    pub total: Decimal,
}

impl VacationBreakdown {
    /// 實際扣除的日期
    pub fn charged_days(&self) -> impl Iterator<Item = &DayCharge> {
        self.days.iter().filter(|day| day.is_charged())
    }

    /// 指定類別的天數
    pub fn count_of(&self, kind: ChargeKind) -> usize {
        self.days.iter().filter(|day| day.kind == kind).count()
    }
}
