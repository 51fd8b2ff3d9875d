//! 物料 MRP 記錄模型

use serde::{Deserialize, Serialize};

use crate::PeriodSeries;

/// 物料 MRP 記錄（淨算結果）
///
/// 六條數列共用同一計劃時界。`on_hand` 完全由前期庫存、
/// 收貨與總需求推導，不可獨立設置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPlan {
    /// 物料ID
    pub item_id: String,

    /// 總需求
    pub gross_requirements: PeriodSeries,

    /// 預計收貨（外部排定的在途收貨）
    pub scheduled_receipts: PeriodSeries,

    /// 預計庫存（各期期末）
    pub on_hand: PeriodSeries,

    /// 淨需求
    pub net_requirements: PeriodSeries,

    /// 計劃訂單下達
    pub planned_order_releases: PeriodSeries,

    /// 計劃訂單收貨
    pub planned_order_receipts: PeriodSeries,
}

impl ItemPlan {
    /// 創建全零記錄
    pub fn empty(item_id: impl Into<String>, horizon: usize) -> Self {
        Self {
            item_id: item_id.into(),
            gross_requirements: PeriodSeries::zeros(horizon),
            scheduled_receipts: PeriodSeries::zeros(horizon),
            on_hand: PeriodSeries::zeros(horizon),
            net_requirements: PeriodSeries::zeros(horizon),
            planned_order_releases: PeriodSeries::zeros(horizon),
            planned_order_receipts: PeriodSeries::zeros(horizon),
        }
    }

    /// 計劃時界（期間數）
    pub fn horizon(&self) -> usize {
        self.gross_requirements.horizon()
    }
}
