//! 批量規則實現

use rust_decimal::Decimal;

/// 批量規則計算器
///
/// 本引擎只有一種批量規則：固定批量向上取整。
/// 訂購量是足以覆蓋缺口的最小批量整數倍。
pub struct LotSizingCalculator;

impl LotSizingCalculator {
    /// 將缺口向上取整到批量的整數倍
    ///
    /// 缺口為零或負時回傳零。呼叫端必須先驗證 `lot_size > 0`。
    pub fn round_up_to_lot(deficit: Decimal, lot_size: Decimal) -> Decimal {
        if deficit <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (deficit / lot_size).ceil() * lot_size
    }
}
