//! # Worktime
//!
//! 休假天數計算與工時彙總
//!
//! 整合 `worktime-core`（資料模型）與 `worktime-calc`（計算引擎）。

pub use worktime_calc::*;
pub use worktime_core::*;
