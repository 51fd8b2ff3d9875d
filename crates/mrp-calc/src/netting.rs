//! 淨需求計算

use rust_decimal::Decimal;

use mrp_core::{ItemParams, ItemPlan, MrpError, PeriodSeries};

use crate::lot_sizing::LotSizingCalculator;

/// 淨需求計算器
pub struct NettingCalculator;

impl NettingCalculator {
    /// 計算單一物料在整個計劃時界上的 MRP 記錄
    ///
    /// 逐期推算，每期依賴前期期末庫存：
    /// 1. 可用量 = 前期期末庫存 + 本期預計收貨
    /// 2. 差額 = 可用量 - 本期總需求
    /// 3. 差額為負時產生淨需求（缺口），計劃訂單收貨按批量向上取整，
    ///    對應的計劃訂單下達落在提前期之前；落到時界之前的下達直接捨棄
    /// 4. 期末庫存由可用量、計劃收貨與總需求結算
    ///
    /// 負的需求或收貨在算術上照常接受，不做驗證；輸出可能因此
    /// 不具實體意義，由呼叫端自行把關。
    pub fn calculate(
        gross_requirements: &PeriodSeries,
        scheduled_receipts: Option<&PeriodSeries>,
        params: &ItemParams,
    ) -> mrp_core::Result<ItemPlan> {
        params.validate()?;

        let horizon = gross_requirements.horizon();
        let receipts = match scheduled_receipts {
            Some(series) => {
                if series.horizon() != horizon {
                    return Err(MrpError::HorizonMismatch {
                        expected: horizon,
                        actual: series.horizon(),
                    });
                }
                series.clone()
            }
            None => PeriodSeries::zeros(horizon),
        };

        let mut plan = ItemPlan::empty(params.item_id.clone(), horizon);
        let lead_time = params.lead_time as usize;
        let mut carry = params.initial_on_hand;

        for t in 0..horizon {
            let available = carry + receipts.get(t);
            let diff = available - gross_requirements.get(t);

            if diff < Decimal::ZERO {
                let deficit = -diff;
                let planned_qty = LotSizingCalculator::round_up_to_lot(deficit, params.lot_size);

                plan.net_requirements.set(t, deficit);
                plan.planned_order_receipts.set(t, planned_qty);
                if t >= lead_time {
                    plan.planned_order_releases.set(t - lead_time, planned_qty);
                }

                carry = available + planned_qty - gross_requirements.get(t);
            } else {
                carry = diff;
            }
            plan.on_hand.set(t, carry);
        }

        plan.gross_requirements = gross_requirements.clone();
        plan.scheduled_receipts = receipts;
        Ok(plan)
    }
}
