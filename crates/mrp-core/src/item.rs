//! 物料 MRP 參數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// 物料 MRP 參數（每個 BOM 節點一份）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemParams {
    /// 物料ID
    pub item_id: String,

    /// 提前期（期間數）
    pub lead_time: u32,

    /// 固定批量
    ///
    /// 計劃訂單收貨永遠是此批量的最小整數倍。
    pub lot_size: Decimal,

    /// 期初庫存
    pub initial_on_hand: Decimal,
}

impl ItemParams {
    /// 創建新的物料參數
    pub fn new(item_id: impl Into<String>, lead_time: u32, lot_size: Decimal) -> Self {
        Self {
            item_id: item_id.into(),
            lead_time,
            lot_size,
            initial_on_hand: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置期初庫存
    pub fn with_initial_on_hand(mut self, on_hand: Decimal) -> Self {
        self.initial_on_hand = on_hand;
        self
    }

    /// 驗證參數
    ///
    /// 批量必須大於零，否則淨算時會除以零，屬於配置錯誤，
    /// 在計算前即拒絕。
    pub fn validate(&self) -> Result<()> {
        if self.lot_size <= Decimal::ZERO {
            return Err(MrpError::InvalidLotSize {
                item_id: self.item_id.clone(),
                lot_size: self.lot_size,
            });
        }
        Ok(())
    }
}
