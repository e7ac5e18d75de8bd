//! 工作型態模型

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, WorktimeError};

/// 平日（週一到週五），索引 0 = 週一, ..., 4 = 週五
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// 個人的每週工作型態
///
/// 每個平日對應一個權重：0 表示不上班，正值表示該日休假時要扣的天數。
/// 週六、週日不屬於此結構，查詢時一律視為不上班。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeekdayWeights", into = "WeekdayWeights")]
pub struct WorkingPattern {
    weights: [Decimal; 5],
}

/// 序列化用的原始欄位（缺少的欄位視為 0）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct WeekdayWeights {
    monday: Decimal,
    tuesday: Decimal,
    wednesday: Decimal,
    thursday: Decimal,
    friday: Decimal,
}

impl TryFrom<WeekdayWeights> for WorkingPattern {
    type Error = WorktimeError;

    fn try_from(raw: WeekdayWeights) -> Result<Self> {
        Self::from_weights([
            raw.monday,
            raw.tuesday,
            raw.wednesday,
            raw.thursday,
            raw.friday,
        ])
    }
}

impl From<WorkingPattern> for WeekdayWeights {
    fn from(pattern: WorkingPattern) -> Self {
        let [monday, tuesday, wednesday, thursday, friday] = pattern.weights;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
        }
    }
}

impl WorkingPattern {
    /// 全職型態（週一到週五權重皆為 1）
    pub fn full_time() -> Self {
        Self {
            weights: [Decimal::ONE; 5],
        }
    }

    /// 完全不上班的型態
    pub fn none() -> Self {
        Self {
            weights: [Decimal::ZERO; 5],
        }
    }

    /// 只在單一平日上班
    pub fn only(weekday: Weekday, weight: Decimal) -> Self {
        Self::none().with_weight(weekday, weight)
    }

    /// 從五個平日權重創建（週一在前），負權重會被拒絕
    pub fn from_weights(weights: [Decimal; 5]) -> Result<Self> {
        for (weekday, weight) in WEEKDAYS.iter().zip(weights.iter()) {
            if *weight < Decimal::ZERO {
                return Err(WorktimeError::NegativeWeight {
                    weekday: *weekday,
                    weight: *weight,
                });
            }
        }

        Ok(Self { weights })
    }

    /// 從排班旗標創建（索引 0 = 週一）
    ///
    /// 少於五筆時其餘平日視為不上班，超過五筆的部分忽略。
    ///
    /// ```
    /// use chrono::Weekday;
    /// use worktime_core::WorkingPattern;
    ///
    /// // 週三休息
    /// let pattern = WorkingPattern::from_flags(&[true, true, false, true, true]);
    /// assert!(!pattern.is_working(Weekday::Wed));
    /// assert!(pattern.is_working(Weekday::Thu));
    /// ```
    pub fn from_flags(flags: &[bool]) -> Self {
        let mut weights = [Decimal::ZERO; 5];
        for (slot, &is_working) in weights.iter_mut().zip(flags.iter()) {
            if is_working {
                *slot = Decimal::ONE;
            }
        }

        Self { weights }
    }

    /// 建構器模式：設置單一平日的權重
    ///
    /// 週末會被忽略；負權重視為 0。
    pub fn with_weight(mut self, weekday: Weekday, weight: Decimal) -> Self {
        if let Some(index) = slot(weekday) {
            self.weights[index] = weight.max(Decimal::ZERO);
        }
        self
    }

    /// 查詢某個星期幾的權重（週末固定為 0）
    pub fn weight(&self, weekday: Weekday) -> Decimal {
        slot(weekday)
            .map(|index| self.weights[index])
            .unwrap_or(Decimal::ZERO)
    }

    /// 檢查該星期幾是否上班
    pub fn is_working(&self, weekday: Weekday) -> bool {
        self.weight(weekday) > Decimal::ZERO
    }

    /// 所有上班的平日
    pub fn working_weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS
            .iter()
            .copied()
            .filter(move |weekday| self.is_working(*weekday))
    }

    /// 一週的權重總和（溢出時飽和）
    pub fn weekly_total(&self) -> Decimal {
        self.weights
            .iter()
            .fold(Decimal::ZERO, |total, weight| total.saturating_add(*weight))
    }
}

impl Default for WorkingPattern {
    fn default() -> Self {
        Self::full_time()
    }
}

fn slot(weekday: Weekday) -> Option<usize> {
    match weekday {
        Weekday::Sat | Weekday::Sun => None,
        other => Some(other.num_days_from_monday() as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_time_pattern() {
        let pattern = WorkingPattern::full_time();

        for weekday in WEEKDAYS {
            assert_eq!(pattern.weight(weekday), Decimal::ONE);
        }
        assert_eq!(pattern.weekly_total(), Decimal::from(5));
    }

    #[rstest]
    #[case(Weekday::Sat)]
    #[case(Weekday::Sun)]
    fn test_weekend_never_working(#[case] weekday: Weekday) {
        let pattern = WorkingPattern::full_time().with_weight(weekday, Decimal::from(3));

        assert_eq!(pattern.weight(weekday), Decimal::ZERO);
        assert!(!pattern.is_working(weekday));
        assert_eq!(pattern.weekly_total(), Decimal::from(5));
    }

    #[test]
    fn test_one_day_worker() {
        let pattern = WorkingPattern::only(Weekday::Wed, Decimal::from(6));

        assert_eq!(pattern.weight(Weekday::Wed), Decimal::from(6));
        assert_eq!(pattern.weight(Weekday::Tue), Decimal::ZERO);
        assert_eq!(pattern.working_weekdays().collect::<Vec<_>>(), vec![Weekday::Wed]);
    }

    #[test]
    fn test_from_weights_rejects_negative() {
        let mut weights = [Decimal::ONE; 5];
        weights[3] = Decimal::from(-1);

        let err = WorkingPattern::from_weights(weights).unwrap_err();
        assert!(matches!(
            err,
            WorktimeError::NegativeWeight {
                weekday: Weekday::Thu,
                ..
            }
        ));
    }

    #[test]
    fn test_with_weight_clamps_negative() {
        let pattern = WorkingPattern::full_time().with_weight(Weekday::Mon, Decimal::from(-2));
        assert_eq!(pattern.weight(Weekday::Mon), Decimal::ZERO);
    }

    #[test]
    fn test_from_flags_short_input() {
        // 只提供週一、週二
        let pattern = WorkingPattern::from_flags(&[true, true]);

        assert!(pattern.is_working(Weekday::Mon));
        assert!(pattern.is_working(Weekday::Tue));
        assert!(!pattern.is_working(Weekday::Wed));
        assert!(!pattern.is_working(Weekday::Fri));
    }

    #[test]
    fn test_fractional_weight() {
        let half = Decimal::new(5, 1);
        let pattern = WorkingPattern::none()
            .with_weight(Weekday::Mon, half)
            .with_weight(Weekday::Fri, half);

        assert_eq!(pattern.weekly_total(), Decimal::ONE);
    }

    #[test]
    fn test_weekly_total_saturates() {
        let pattern = WorkingPattern::none()
            .with_weight(Weekday::Mon, Decimal::MAX)
            .with_weight(Weekday::Tue, Decimal::ONE);

        assert_eq!(pattern.weekly_total(), Decimal::MAX);
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_zero() {
        let pattern: WorkingPattern =
            serde_json::from_str(r#"{"wednesday": 6}"#).unwrap();

        assert_eq!(pattern, WorkingPattern::only(Weekday::Wed, Decimal::from(6)));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: std::result::Result<WorkingPattern, _> =
            serde_json::from_str(r#"{"monday": -1}"#);
        assert!(result.is_err());
    }
}
