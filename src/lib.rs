//! # GHP-MRP
//!
//! 教學用多階 MRP 計算引擎：主生產排程（GHP）滾算、
//! 需求傳遞（BOM 展開）與沿 BOM 拓撲順序的逐層淨需求計算。
//!
//! 期間是抽象的整數刻度（無日曆語義），所有數量使用
//! `rust_decimal::Decimal`。完整計算入口見 [`MrpCalculator`]。

pub use mrp_bom::{BomEdge, BomError, BomGraph, ComponentId};
pub use mrp_calc::{
    DemandPropagator, LotSizingCalculator, MrpCalculator, MrpResult, NettingCalculator,
    RollupCalculator,
};
pub use mrp_core::{ItemParams, ItemPlan, MasterSchedule, MrpError, PeriodSeries};
