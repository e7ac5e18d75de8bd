//! 休假天數計算

use chrono::{Datelike, NaiveDate, Weekday};
use rayon::prelude::*;
use rust_decimal::Decimal;
use worktime_core::{
    DateRange, HolidayCalendar, Result, VacationRequest, WorkingPattern, WorktimeConfig,
    WorktimeError,
};

use crate::{ChargeKind, DayCharge, VacationBreakdown};

/// 休假天數計算器
///
/// 逐日走訪區間，每一天依序判斷：週末 → 國定假日 → 工作型態權重。
/// 沒有任何「整週」捷徑，頭尾不完整的週也用同一條規則處理。
#[derive(Debug, Clone, Default)]
pub struct VacationDayCalculator {
    /// 計算配置
    config: WorktimeConfig,

    /// 國定假日日曆
    holidays: HolidayCalendar,
}

impl VacationDayCalculator {
    /// 創建新的計算器（假日取自配置，配置需通過驗證）
    pub fn new(config: WorktimeConfig) -> Result<Self> {
        config.validate()?;

        let holidays = config.holiday_calendar();
        Ok(Self { config, holidays })
    }

    /// 建構器模式：替換假日日曆
    pub fn with_holiday_calendar(mut self, holidays: HolidayCalendar) -> Self {
        self.holidays = holidays;
        self
    }

    /// 計算區間內（起訖皆包含）應扣除的休假天數
    pub fn calculate(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        pattern: &WorkingPattern,
    ) -> Result<Decimal> {
        let range = self.checked_range(start, end)?;

        let charges = range
            .iter()
            .map(|date| self.charge_for(date, pattern))
            .filter(DayCharge::is_charged)
            .inspect(|charge| {
                tracing::trace!("扣除 {} ({}): {}", charge.date, charge.weekday, charge.weight);
            });
        let total = sum_weights(charges)?;

        tracing::debug!("休假計算 {} ~ {}: {} 天", start, end, total);

        Ok(total)
    }

    /// 計算逐日明細
    pub fn breakdown(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        pattern: &WorkingPattern,
    ) -> Result<VacationBreakdown> {
        let range = self.checked_range(start, end)?;

        let days: Vec<DayCharge> = range
            .iter()
            .map(|date| self.charge_for(date, pattern))
            .collect();
        let total = sum_weights(days.iter().copied().filter(DayCharge::is_charged))?;

        Ok(VacationBreakdown { range, days, total })
    }

    /// 批次計算多筆休假申請（並行，結果順序與輸入相同）
    pub fn calculate_many(&self, requests: &[VacationRequest]) -> Vec<Result<Decimal>> {
        tracing::debug!("批次休假計算：{} 筆", requests.len());

        requests
            .par_iter()
            .map(|request| self.calculate(request.start, request.end, &request.pattern))
            .collect()
    }

    /// 判斷單一日期的扣除類別與權重
    pub fn charge_for(&self, date: NaiveDate, pattern: &WorkingPattern) -> DayCharge {
        let weekday = date.weekday();

        let (kind, weight) = if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            (ChargeKind::Weekend, Decimal::ZERO)
        } else if self.holidays.is_holiday(date) {
            (ChargeKind::Holiday, Decimal::ZERO)
        } else {
            let weight = pattern.weight(weekday);
            if weight > Decimal::ZERO {
                (ChargeKind::Working, weight)
            } else {
                (ChargeKind::NonWorkingDay, Decimal::ZERO)
            }
        };

        DayCharge {
            date,
            weekday,
            weight,
            kind,
        }
    }

    pub fn config(&self) -> &WorktimeConfig {
        &self.config
    }

    pub fn holiday_calendar(&self) -> &HolidayCalendar {
        &self.holidays
    }

    fn checked_range(&self, start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
        let range = DateRange::new(start, end)?;

        if let Some(limit) = self.config.max_range_days {
            let days = range.len_days();
            if days > u64::from(limit) {
                tracing::warn!("日期區間過長 {} ~ {}: {} 天（上限 {}）", start, end, days, limit);
                return Err(WorktimeError::RangeTooLong { days, limit });
            }
        }

        Ok(range)
    }
}

/// 累加扣除權重，超出 Decimal 範圍時回傳錯誤
fn sum_weights(mut charges: impl Iterator<Item = DayCharge>) -> Result<Decimal> {
    charges.try_fold(Decimal::ZERO, |total, charge| {
        total.checked_add(charge.weight).ok_or_else(|| {
            tracing::warn!("休假天數累加溢出於 {}", charge.date);
            WorktimeError::Overflow(format!("休假天數累加溢出於 {}", charge.date))
        })
    })
}

/// 以預設配置計算休假天數（無假日、無區間上限）
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use worktime_calc::calculate_total_vacation_days;
/// use worktime_core::WorkingPattern;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
///
/// let days = calculate_total_vacation_days(monday, sunday, &WorkingPattern::full_time()).unwrap();
/// assert_eq!(days, Decimal::from(5));
/// ```
pub fn calculate_total_vacation_days(
    start: NaiveDate,
    end: NaiveDate,
    pattern: &WorkingPattern,
) -> Result<Decimal> {
    VacationDayCalculator::default().calculate(start, end, pattern)
}
