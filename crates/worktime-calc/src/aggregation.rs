//! 分配與工時彙總

use std::collections::HashMap;

use uuid::Uuid;
use worktime_core::{
    AllocationRecord, PersonTimeRecord, Result, WeeklyMinutes, WorktimeConfig,
    DEFAULT_PROJECTION_WEEKS,
};

/// 分配彙總器
///
/// 每週分鐘數乘上投影週數（預設雙週），溢出時飽和。
#[derive(Debug, Clone, Copy)]
pub struct AllocationAggregator {
    projection_weeks: i64,
}

impl AllocationAggregator {
    /// 從配置創建（配置需通過驗證）
    pub fn new(config: &WorktimeConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            projection_weeks: i64::from(config.projection_weeks),
        })
    }

    /// 分配的投影總分鐘數
    pub fn total_allocations(&self, allocation: &AllocationRecord) -> i64 {
        self.project(&allocation.minutes)
    }

    /// 人員的投影工作負載（沒有人員時為 0）
    pub fn working_load(&self, person: Option<&PersonTimeRecord>) -> i64 {
        person.map(|p| self.project(&p.minutes)).unwrap_or(0)
    }

    /// 多筆分配的投影總和
    pub fn total_allocated(&self, allocations: &[AllocationRecord]) -> i64 {
        allocations
            .iter()
            .map(|allocation| self.total_allocations(allocation))
            .fold(0, i64::saturating_add)
    }

    /// 剩餘時間（依位置對應已使用時間）
    ///
    /// 在 `allocations` 中找出第一筆相等的分配，取 `time_entries` 同位置的已使用分鐘數。
    /// 找不到分配、沒有已使用時間或差值為 0 時皆回傳 0。
    /// 同一分配重複出現時只會對應到第一筆。
    pub fn time_left(
        &self,
        allocation: &AllocationRecord,
        allocations: &[AllocationRecord],
        time_entries: &[Option<i64>],
    ) -> i64 {
        let consumed = allocations
            .iter()
            .position(|candidate| candidate == allocation)
            .and_then(|index| time_entries.get(index).copied().flatten());

        self.remaining(allocation, consumed)
    }

    /// 剩餘時間（依分配ID對應已使用時間）
    pub fn time_left_by_id(
        &self,
        allocation: &AllocationRecord,
        consumed_by_id: &HashMap<Uuid, i64>,
    ) -> i64 {
        self.remaining(allocation, consumed_by_id.get(&allocation.id).copied())
    }

    fn remaining(&self, allocation: &AllocationRecord, consumed: Option<i64>) -> i64 {
        match consumed {
            Some(consumed) => self.total_allocations(allocation).saturating_sub(consumed),
            None => 0,
        }
    }

    fn project(&self, minutes: &WeeklyMinutes) -> i64 {
        minutes.weekly_total().saturating_mul(self.projection_weeks)
    }
}

impl Default for AllocationAggregator {
    fn default() -> Self {
        Self {
            projection_weeks: i64::from(DEFAULT_PROJECTION_WEEKS),
        }
    }
}

/// 分配的雙週總分鐘數
pub fn total_allocations(allocation: &AllocationRecord) -> i64 {
    AllocationAggregator::default().total_allocations(allocation)
}

/// 人員的雙週工作負載，沒有人員時為 0
pub fn calculate_working_load(person: Option<&PersonTimeRecord>) -> i64 {
    AllocationAggregator::default().working_load(person)
}

/// 多筆分配的雙週總和
pub fn total_allocated(allocations: &[AllocationRecord]) -> i64 {
    AllocationAggregator::default().total_allocated(allocations)
}

/// 剩餘時間 = 雙週分配 - 已使用（依位置對應）
pub fn time_left(
    allocation: &AllocationRecord,
    allocations: &[AllocationRecord],
    time_entries: &[Option<i64>],
) -> i64 {
    AllocationAggregator::default().time_left(allocation, allocations, time_entries)
}

/// 剩餘時間 = 雙週分配 - 已使用（依分配ID對應）
pub fn time_left_by_id(allocation: &AllocationRecord, consumed_by_id: &HashMap<Uuid, i64>) -> i64 {
    AllocationAggregator::default().time_left_by_id(allocation, consumed_by_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn allocation(project: &str, days: [i64; 5]) -> AllocationRecord {
        AllocationRecord::new(project.to_string(), WeeklyMinutes::from_days(days))
    }

    #[test]
    fn test_total_allocations_partial_record() {
        let record: AllocationRecord =
            serde_json::from_str(r#"{"project": "api", "monday": 60, "tuesday": 60}"#).unwrap();

        assert_eq!(total_allocations(&record), 240);
    }

    #[test]
    fn test_working_load() {
        let person = PersonTimeRecord::new(
            "Robin".to_string(),
            WeeklyMinutes::from_days([480, 480, 480, 480, 240]),
        );

        assert_eq!(calculate_working_load(Some(&person)), 4320);
        assert_eq!(calculate_working_load(None), 0);
    }

    #[test]
    fn test_custom_projection() {
        let aggregator =
            AllocationAggregator::new(&WorktimeConfig::new().with_projection_weeks(1)).unwrap();
        let record = allocation("web", [60, 60, 60, 60, 60]);

        assert_eq!(aggregator.total_allocations(&record), 300);
    }

    #[test]
    fn test_zero_projection_rejected() {
        let result = AllocationAggregator::new(&WorktimeConfig::new().with_projection_weeks(0));
        assert!(matches!(result, Err(worktime_core::WorktimeError::ConfigError(_))));
    }

    #[test]
    fn test_huge_minutes_saturate() {
        let record: AllocationRecord =
            serde_json::from_str(&format!(r#"{{"monday": {}, "tuesday": 1}}"#, i64::MAX)).unwrap();
        assert_eq!(total_allocations(&record), i64::MAX);

        let record: AllocationRecord =
            serde_json::from_str(r#"{"monday": 5000000000000000000}"#).unwrap();
        assert_eq!(total_allocations(&record), i64::MAX);

        assert_eq!(total_allocated(&[record.clone(), record]), i64::MAX);
    }

    #[test]
    fn test_total_allocated() {
        let allocations = vec![
            allocation("web", [60, 0, 0, 0, 0]),
            allocation("api", [0, 30, 0, 0, 30]),
        ];

        assert_eq!(total_allocated(&allocations), 240);
        assert_eq!(total_allocated(&[]), 0);
    }

    #[rstest]
    #[case(Some(100), 140)]
    #[case(Some(240), 0)]
    #[case(Some(300), -60)]
    #[case(None, 0)]
    fn test_time_left(#[case] consumed: Option<i64>, #[case] expected: i64) {
        let target = allocation("api", [60, 60, 0, 0, 0]);
        let allocations = vec![allocation("web", [30, 0, 0, 0, 0]), target.clone()];
        let time_entries = vec![Some(10), consumed];

        assert_eq!(time_left(&target, &allocations, &time_entries), expected);
    }

    #[test]
    fn test_time_left_missing_allocation() {
        let target = allocation("api", [60, 60, 0, 0, 0]);
        let allocations = vec![allocation("web", [30, 0, 0, 0, 0])];

        assert_eq!(time_left(&target, &allocations, &[Some(10)]), 0);
    }

    #[test]
    fn test_time_left_short_entries() {
        let target = allocation("api", [60, 60, 0, 0, 0]);
        let allocations = vec![target.clone()];

        assert_eq!(time_left(&target, &allocations, &[]), 0);
    }

    #[test]
    fn test_time_left_duplicate_uses_first_match() {
        let target = allocation("api", [60, 60, 0, 0, 0]);
        let allocations = vec![target.clone(), target.clone()];

        assert_eq!(time_left(&target, &allocations, &[Some(40), Some(200)]), 200);
    }

    #[test]
    fn test_time_left_by_id() {
        let target = allocation("api", [60, 60, 0, 0, 0]);
        let other = allocation("web", [30, 0, 0, 0, 0]);
        let consumed = HashMap::from([(target.id, 100), (other.id, 10)]);

        assert_eq!(time_left_by_id(&target, &consumed), 140);
        assert_eq!(time_left_by_id(&allocation("new", [60, 0, 0, 0, 0]), &consumed), 0);
    }
}
