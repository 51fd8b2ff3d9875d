//! 主生產排程（GHP）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MrpError, PeriodSeries, Result};

/// 主生產排程（GHP，BOM 第 0 階）
///
/// 頂層物料的預測需求與生產數列。生產數列同時是
/// 第 1 階物料需求傳遞的驅動數列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterSchedule {
    /// 頂層物料ID
    pub item_id: String,

    /// 預測需求
    pub demand: PeriodSeries,

    /// 生產
    pub production: PeriodSeries,

    /// 期初庫存
    pub initial_on_hand: Decimal,

    /// 提前期（期間數），用於向下傳遞需求時的位移
    pub lead_time: u32,
}

impl MasterSchedule {
    /// 創建新的主排程
    pub fn new(item_id: impl Into<String>, demand: PeriodSeries, production: PeriodSeries) -> Self {
        Self {
            item_id: item_id.into(),
            demand,
            production,
            initial_on_hand: Decimal::ZERO,
            lead_time: 1,
        }
    }

    /// 建構器模式：設置期初庫存
    pub fn with_initial_on_hand(mut self, on_hand: Decimal) -> Self {
        self.initial_on_hand = on_hand;
        self
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_time(mut self, lead_time: u32) -> Self {
        self.lead_time = lead_time;
        self
    }

    /// 計劃時界（期間數）
    pub fn horizon(&self) -> usize {
        self.demand.horizon()
    }

    /// 驗證排程
    ///
    /// 需求與生產數列的長度必須一致，否則拒絕計算，
    /// 不做任何隱式截斷或補零。
    pub fn validate(&self) -> Result<()> {
        if self.production.horizon() != self.demand.horizon() {
            return Err(MrpError::HorizonMismatch {
                expected: self.demand.horizon(),
                actual: self.production.horizon(),
            });
        }
        Ok(())
    }
}
