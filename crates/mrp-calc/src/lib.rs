//! # MRP Calculation Engine
//!
//! 核心 MRP 計算引擎

pub mod calculator;
pub mod lot_sizing;
pub mod netting;
pub mod propagation;
pub mod rollup;

// Re-export 主要類型
pub use calculator::MrpCalculator;
pub use lot_sizing::LotSizingCalculator;
pub use netting::NettingCalculator;
pub use propagation::DemandPropagator;
pub use rollup::RollupCalculator;

/// MRP 計算結果
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MrpResult {
    /// 頂層物料的預計可用庫存（GHP 滾算）
    pub master_available: mrp_core::PeriodSeries,

    /// 各物料的 MRP 記錄（拓撲順序）
    pub item_plans: Vec<mrp_core::ItemPlan>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl MrpResult {
    /// 依物料 ID 查找 MRP 記錄
    pub fn item_plan(&self, item_id: &str) -> Option<&mrp_core::ItemPlan> {
        self.item_plans.iter().find(|p| p.item_id == item_id)
    }
}
