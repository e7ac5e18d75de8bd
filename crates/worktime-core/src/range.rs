//! 日期區間與逐日迭代

use std::iter::FusedIterator;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Result, WorktimeError};

/// 日期區間（起訖皆包含）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// 創建日期區間，開始日晚於結束日時回傳錯誤
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(WorktimeError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// 單日區間
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 區間包含的天數（至少為 1）
    pub fn len_days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// 檢查日期是否落在區間內
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// 逐日迭代；每次呼叫都從開始日重新產生
    pub fn iter(&self) -> DayIter {
        DayIter {
            front: Some(self.start),
            back: Some(self.end),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DayIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DayIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 產生 `start` 到 `end`（包含）之間的每一天
pub fn iterate(start: NaiveDate, end: NaiveDate) -> Result<DayIter> {
    DateRange::new(start, end).map(|range| range.iter())
}

/// 逐日迭代器
///
/// `front` 與 `back` 皆為尚未產出的日期；兩者交會後迭代結束。
#[derive(Debug, Clone)]
pub struct DayIter {
    front: Option<NaiveDate>,
    back: Option<NaiveDate>,
}

impl DayIter {
    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let (current, back) = (self.front?, self.back?);

        if current >= back {
            self.finish();
        } else {
            // back 之前一定還有日期，succ_opt 不會溢出
            self.front = current.succ_opt();
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.front, self.back) {
            (Some(front), Some(back)) if front <= back => {
                let remaining = (back - front).num_days() as usize + 1;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl DoubleEndedIterator for DayIter {
    fn next_back(&mut self) -> Option<NaiveDate> {
        let (front, current) = (self.front?, self.back?);

        if current <= front {
            self.finish();
        } else {
            self.back = current.pred_opt();
        }

        Some(current)
    }
}

impl ExactSizeIterator for DayIter {}

impl FusedIterator for DayIter {}
