//! 分配與人員工時模型

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 每週平日分鐘數（週一到週五），缺少的欄位視為 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyMinutes {
    pub monday: i64,
    pub tuesday: i64,
    pub wednesday: i64,
    pub thursday: i64,
    pub friday: i64,
}

impl WeeklyMinutes {
    /// 從五個平日分鐘數創建（週一在前）
    pub fn from_days(days: [i64; 5]) -> Self {
        let [monday, tuesday, wednesday, thursday, friday] = days;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
        }
    }

    /// 建構器模式：設置某個平日的分鐘數（週末忽略）
    pub fn with_day(mut self, weekday: Weekday, minutes: i64) -> Self {
        match weekday {
            Weekday::Mon => self.monday = minutes,
            Weekday::Tue => self.tuesday = minutes,
            Weekday::Wed => self.wednesday = minutes,
            Weekday::Thu => self.thursday = minutes,
            Weekday::Fri => self.friday = minutes,
            Weekday::Sat | Weekday::Sun => {}
        }
        self
    }

    /// 查詢某個星期幾的分鐘數（週末固定為 0）
    pub fn get(&self, weekday: Weekday) -> i64 {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat | Weekday::Sun => 0,
        }
    }

    /// 一週分鐘數總和（溢出時飽和）
    pub fn weekly_total(&self) -> i64 {
        [self.tuesday, self.wednesday, self.thursday, self.friday]
            .iter()
            .fold(self.monday, |total, minutes| total.saturating_add(*minutes))
    }
}

/// 專案分配（某人每週投入某專案的分鐘數）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// 分配ID
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// 人員ID
    #[serde(default)]
    pub person_id: Option<Uuid>,

    /// 專案名稱
    #[serde(default)]
    pub project: String,

    /// 每週計劃分鐘數
    #[serde(flatten)]
    pub minutes: WeeklyMinutes,
}

impl AllocationRecord {
    /// 創建新的分配
    pub fn new(project: String, minutes: WeeklyMinutes) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id: None,
            project,
            minutes,
        }
    }

    /// 建構器模式：設置人員
    pub fn with_person_id(mut self, person_id: Uuid) -> Self {
        self.person_id = Some(person_id);
        self
    }
}

/// 人員的每週工時
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonTimeRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub minutes: WeeklyMinutes,
}

impl PersonTimeRecord {
    pub fn new(name: String, minutes: WeeklyMinutes) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            minutes,
        }
    }
}
