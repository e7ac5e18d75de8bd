//! 休假申請

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DateRange, Result, WorkingPattern};

/// 休假申請（批次計算的輸入）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// 申請ID
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// 人員ID
    #[serde(default)]
    pub person_id: Option<Uuid>,

    /// 開始日（包含）
    pub start: NaiveDate,

    /// 結束日（包含）
    pub end: NaiveDate,

    /// 申請人的工作型態
    pub pattern: WorkingPattern,
}

impl VacationRequest {
    /// 創建新的休假申請
    pub fn new(start: NaiveDate, end: NaiveDate, pattern: WorkingPattern) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id: None,
            start,
            end,
            pattern,
        }
    }

    /// 建構器模式：設置人員
    pub fn with_person_id(mut self, person_id: Uuid) -> Self {
        self.person_id = Some(person_id);
        self
    }

    /// 申請的日期區間，開始日晚於結束日時回傳錯誤
    pub fn range(&self) -> Result<DateRange> {
        DateRange::new(self.start, self.end)
    }
}
