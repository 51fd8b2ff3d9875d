//! # MRP BOM
//!
//! 物料清單結構：以 `(父件, 子件, 單位用量)` 邊構成的有向無環圖

pub mod component;
pub mod graph;

// Re-export 主要類型
pub use component::ComponentId;
pub use graph::{BomEdge, BomGraph};

/// BOM 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum BomError {
    #[error("BOM 邊不可自我引用: {0}")]
    SelfReference(ComponentId),

    #[error("重複的 BOM 邊: {parent} → {child}")]
    DuplicateEdge {
        parent: ComponentId,
        child: ComponentId,
    },

    #[error("單位用量必須大於零: {parent} → {child}")]
    NonPositiveQuantity {
        parent: ComponentId,
        child: ComponentId,
    },

    #[error("BOM 圖存在循環，無法拓撲排序")]
    CycleDetected,
}

pub type Result<T> = std::result::Result<T, BomError>;
