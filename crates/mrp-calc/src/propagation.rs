//! 需求傳遞（BOM 展開的時間位移與用量放大）

use rust_decimal::Decimal;

use mrp_core::PeriodSeries;

/// 需求傳遞計算器
pub struct DemandPropagator;

impl DemandPropagator {
    /// 將父件驅動數列往前位移並按單位用量放大，得到子件總需求
    ///
    /// `result[i] = series[i + shift] * quantity_per_unit`；
    /// 子件必須比父件提早 `shift` 期備妥。超出來源數列長度的
    /// 期間視為零需求，不是錯誤。各期彼此獨立，無順序依賴。
    pub fn shift_backward(
        series: &PeriodSeries,
        shift: u32,
        quantity_per_unit: Decimal,
        horizon: usize,
    ) -> PeriodSeries {
        let mut result = PeriodSeries::zeros(horizon);
        for i in 0..horizon {
            let source = i + shift as usize;
            if source < series.horizon() {
                result.set(i, series.get(source) * quantity_per_unit);
            }
        }
        result
    }
}
