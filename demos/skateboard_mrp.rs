//! 滑板多階 MRP 計算完整範例
//!
//! 參考 BOM：SKATEBOARD（第 0 階）→ DECK ×1、WHEEL ×4（第 1 階）
//! → BEARING ×1（第 2 階）。展示 GHP 滾算、需求傳遞與逐層淨算，
//! 以 `--json` 輸出機器可讀結果。

use std::collections::HashMap;

use rust_decimal::Decimal;

use ghp_mrp::{
    BomGraph, ComponentId, ItemParams, ItemPlan, MasterSchedule, MrpCalculator, PeriodSeries,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("===== Skateboard MRP Example =====\n");

    // 步驟 1: 建立 BOM 結構
    println!("[1] BOM Structure");
    let mut bom = BomGraph::new();
    bom.add_edge(
        ComponentId::new("SKATEBOARD-001"),
        ComponentId::new("DECK-001"),
        Decimal::from(1),
    )?;
    bom.add_edge(
        ComponentId::new("SKATEBOARD-001"),
        ComponentId::new("WHEEL-001"),
        Decimal::from(4),
    )?;
    bom.add_edge(
        ComponentId::new("WHEEL-001"),
        ComponentId::new("BEARING-001"),
        Decimal::from(1),
    )?;
    println!("    Level 0: SKATEBOARD-001");
    println!("    Level 1: DECK-001 x1, WHEEL-001 x4");
    println!("    Level 2: BEARING-001 x1 (per wheel)\n");

    // 步驟 2: 設定 MRP 參數（參考預設值）
    println!("[2] MRP Parameters");
    let mut configs = HashMap::new();
    configs.insert(
        "DECK-001".to_string(),
        ItemParams::new("DECK-001", 2, Decimal::from(100))
            .with_initial_on_hand(Decimal::from(5)),
    );
    configs.insert(
        "WHEEL-001".to_string(),
        ItemParams::new("WHEEL-001", 2, Decimal::from(400))
            .with_initial_on_hand(Decimal::from(10)),
    );
    configs.insert(
        "BEARING-001".to_string(),
        ItemParams::new("BEARING-001", 3, Decimal::from(400))
            .with_initial_on_hand(Decimal::from(15)),
    );
    println!("    DECK-001:    lead time 2, lot size 100, on hand 5");
    println!("    WHEEL-001:   lead time 2, lot size 400, on hand 10");
    println!("    BEARING-001: lead time 3, lot size 400, on hand 15\n");

    // 步驟 3: 主生產排程（GHP，時界 10 期）
    println!("[3] Master Schedule (GHP)");
    let schedule = MasterSchedule::new(
        "SKATEBOARD-001",
        PeriodSeries::from_ints(&[0, 10, 10, 0, 20, 10, 0, 30, 10, 0]),
        PeriodSeries::from_ints(&[0, 0, 20, 0, 30, 0, 0, 40, 0, 0]),
    )
    .with_initial_on_hand(Decimal::from(2))
    .with_lead_time(1);
    println!("    Horizon 10 periods, on hand 2, lead time 1\n");

    // 步驟 4: 執行 MRP
    println!("[4] Execute MRP Calculation");
    let calculator = MrpCalculator::new(bom, configs);
    let result = calculator.calculate(&schedule, &HashMap::new())?;
    println!(
        "    Completed in {} ms\n",
        result.calculation_time_ms.unwrap_or(0)
    );

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // 步驟 5: 顯示結果（零值留白，沿用展示慣例）
    println!("[5] GHP (Level 0)");
    print_series_row("Demand", &schedule.demand);
    print_series_row("Production", &schedule.production);
    print_series_row("Available", &result.master_available);
    println!();

    for plan in &result.item_plans {
        let level = if plan.item_id == "BEARING-001" { 2 } else { 1 };
        println!("[5] MRP - {} (Level {})", plan.item_id, level);
        print_plan(plan);
        println!();
    }

    println!("===== MRP Calculation Complete =====");
    Ok(())
}

/// 輸出一個物料的完整 MRP 表
fn print_plan(plan: &ItemPlan) {
    print_series_row("Gross requirements", &plan.gross_requirements);
    print_series_row("Scheduled receipts", &plan.scheduled_receipts);
    print_series_row("Projected on hand", &plan.on_hand);
    print_series_row("Net requirements", &plan.net_requirements);
    print_series_row("Planned order releases", &plan.planned_order_releases);
    print_series_row("Planned order receipts", &plan.planned_order_receipts);
}

/// 輸出一列期間數列，零值留白
fn print_series_row(label: &str, series: &PeriodSeries) {
    print!("    {label:<24}");
    for value in series.iter() {
        if value.is_zero() {
            print!("{:>6}", "");
        } else {
            print!("{value:>6}");
        }
    }
    println!();
}
