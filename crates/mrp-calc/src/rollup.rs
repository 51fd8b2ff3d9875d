//! 主生產排程（GHP）滾算

use mrp_core::{MasterSchedule, PeriodSeries};

/// GHP 滾算計算器
pub struct RollupCalculator;

impl RollupCalculator {
    /// 推算頂層物料的預計可用庫存
    ///
    /// `available[t] = available[t-1] + production[t] - demand[t]`，
    /// 期初為排程的期初庫存。無批量、無提前期，數值可以為負。
    pub fn project(schedule: &MasterSchedule) -> mrp_core::Result<PeriodSeries> {
        schedule.validate()?;

        let horizon = schedule.horizon();
        let mut available = PeriodSeries::zeros(horizon);
        let mut carry = schedule.initial_on_hand;

        for t in 0..horizon {
            carry = carry + schedule.production.get(t) - schedule.demand.get(t);
            available.set(t, carry);
        }
        Ok(available)
    }
}
