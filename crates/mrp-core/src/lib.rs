//! # MRP Core
//!
//! 核心資料模型與類型定義

pub mod item;
pub mod plan;
pub mod schedule;
pub mod series;

// Re-export 主要類型
pub use item::ItemParams;
pub use plan::ItemPlan;
pub use schedule::MasterSchedule;
pub use series::PeriodSeries;

/// MRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("找不到物料配置: {0}")]
    ConfigNotFound(String),

    #[error("無效的批量: {item_id} 的批量為 {lot_size}，必須大於零")]
    InvalidLotSize {
        item_id: String,
        lot_size: rust_decimal::Decimal,
    },

    #[error("數列長度與計劃時界不符: 預期 {expected} 期，實際 {actual} 期")]
    HorizonMismatch { expected: usize, actual: usize },

    #[error("主排程物料不是 BOM 的根節點: {0}")]
    UnknownMasterItem(String),

    #[error("拓撲排序錯誤: {0}")]
    TopologicalSortError(String),
}

pub type Result<T> = std::result::Result<T, MrpError>;
