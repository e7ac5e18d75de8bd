//! 休假天數計算示例

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use worktime::{
    calculate_working_load, time_left, AllocationRecord, PersonTimeRecord, VacationDayCalculator,
    WeeklyMinutes, WorkingPattern, WorktimeConfig,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== 休假天數計算示例 ===\n");

    // 配置：可由第一個參數指定 JSON 檔
    let config = match std::env::args().nth(1) {
        Some(path) => WorktimeConfig::from_json_file(path)?,
        None => WorktimeConfig::new().with_holidays(vec![NaiveDate::from_ymd_opt(2024, 5, 1)
            .ok_or_else(|| anyhow::anyhow!("無效的假日"))?]),
    };
    let calculator = VacationDayCalculator::new(config)?;

    let start = NaiveDate::from_ymd_opt(2024, 4, 29).ok_or_else(|| anyhow::anyhow!("無效的開始日"))?;
    let end = NaiveDate::from_ymd_opt(2024, 5, 10).ok_or_else(|| anyhow::anyhow!("無效的結束日"))?;

    let patterns = [
        ("全職", WorkingPattern::full_time()),
        ("週三休", WorkingPattern::full_time().with_weight(Weekday::Wed, Decimal::ZERO)),
        ("半天週五", WorkingPattern::full_time().with_weight(Weekday::Fri, Decimal::new(5, 1))),
        ("只上週三", WorkingPattern::only(Weekday::Wed, Decimal::ONE)),
    ];

    println!("休假區間: {} ~ {}", start, end);
    for (label, pattern) in &patterns {
        let breakdown = calculator.breakdown(start, end, pattern)?;
        println!("  - {}: 扣除 {} 天", label, breakdown.total);
        for day in breakdown.charged_days() {
            println!("      {} {} ({})", day.date, day.weekday, day.weight);
        }
    }

    // 衝刺看板：分配與剩餘時間
    let allocations = vec![
        AllocationRecord::new("frontend".to_string(), WeeklyMinutes::from_days([120, 120, 0, 0, 0])),
        AllocationRecord::new("backend".to_string(), WeeklyMinutes::from_days([0, 0, 240, 240, 120])),
    ];
    let time_entries = vec![Some(300), Some(650)];
    let person = PersonTimeRecord::new(
        "Sam".to_string(),
        WeeklyMinutes::from_days([480, 480, 480, 480, 240]),
    );

    println!("\n工作負載: {} 分鐘", calculate_working_load(Some(&person)));
    for allocation in &allocations {
        println!(
            "  - {}: 剩餘 {} 分鐘",
            allocation.project,
            time_left(allocation, &allocations, &time_entries)
        );
    }

    Ok(())
}
