//! MRP 主計算器

use std::collections::HashMap;

use mrp_bom::{BomGraph, ComponentId};
use mrp_core::{ItemParams, MasterSchedule, MrpError, PeriodSeries};

use crate::{DemandPropagator, MrpResult, NettingCalculator, RollupCalculator};

/// MRP 計算器
///
/// 沿 BOM 拓撲順序逐層傳遞需求並淨算。計算器本身只持有
/// BOM 與各物料參數；每次呼叫都從輸入快照完整重算，
/// 不保留任何中間狀態，也沒有快取或部分失效。
pub struct MrpCalculator {
    /// BOM 圖
    bom: BomGraph,

    /// 各物料 MRP 參數
    configs: HashMap<String, ItemParams>,
}

impl MrpCalculator {
    /// 創建新的 MRP 計算器
    pub fn new(bom: BomGraph, configs: HashMap<String, ItemParams>) -> Self {
        Self { bom, configs }
    }

    /// 主 MRP 計算入口
    ///
    /// 以主排程的生產數列為根驅動。每個子件的總需求是所有
    /// 父件驅動數列經 `shift_backward`（位移 = 父件自身提前期、
    /// 放大 = 邊上單位用量）後的逐期總和；子件自身的驅動數列
    /// 則是它的總需求。需求只向下流動，子件不回饋父件。
    pub fn calculate(
        &self,
        schedule: &MasterSchedule,
        scheduled_receipts: &HashMap<String, PeriodSeries>,
    ) -> mrp_core::Result<MrpResult> {
        tracing::info!(
            "開始 MRP 計算：主排程 {}，時界 {} 期，物料 {} 個",
            schedule.item_id,
            schedule.horizon(),
            self.bom.node_count()
        );
        let start_time = std::time::Instant::now();

        schedule.validate()?;
        let horizon = schedule.horizon();

        // Step 1: 主排程物料必須是 BOM 的根節點
        let root = ComponentId::new(schedule.item_id.as_str());
        if !self.bom.is_root(&root) {
            return Err(MrpError::UnknownMasterItem(schedule.item_id.clone()));
        }

        // Step 2: GHP 滾算
        tracing::debug!("Step 1: GHP 滾算");
        let master_available = RollupCalculator::project(schedule)?;

        // Step 3: 拓撲排序（父件在前）
        tracing::debug!("Step 2: 拓撲排序");
        let sorted = self
            .bom
            .topological_sort()
            .map_err(|e| MrpError::TopologicalSortError(e.to_string()))?;
        tracing::debug!("拓撲順序: {:?}", sorted);

        // Step 4: 逐物料傳遞需求並淨算
        tracing::debug!("Step 3: 逐物料淨算");
        let mut drivers: HashMap<String, (PeriodSeries, u32)> = HashMap::new();
        drivers.insert(
            schedule.item_id.clone(),
            (schedule.production.clone(), schedule.lead_time),
        );

        let mut item_plans = Vec::with_capacity(sorted.len().saturating_sub(1));
        for component in &sorted {
            if component == &root {
                continue;
            }

            let mut gross = PeriodSeries::zeros(horizon);
            for (parent, quantity_per_unit) in self.bom.parents(component) {
                let Some((driver, lead_time)) = drivers.get(parent.as_str()) else {
                    continue;
                };
                let contribution =
                    DemandPropagator::shift_backward(driver, *lead_time, quantity_per_unit, horizon);
                gross.accumulate(&contribution);
            }

            let params = self
                .configs
                .get(component.as_str())
                .ok_or_else(|| MrpError::ConfigNotFound(component.as_str().to_string()))?;

            let plan = NettingCalculator::calculate(
                &gross,
                scheduled_receipts.get(component.as_str()),
                params,
            )?;
            tracing::debug!(
                "物料 {} 淨算完成：淨需求合計 {}",
                component,
                plan.net_requirements.iter().copied().sum::<rust_decimal::Decimal>()
            );

            drivers.insert(component.as_str().to_string(), (gross, params.lead_time));
            item_plans.push(plan);
        }

        let elapsed = start_time.elapsed();
        tracing::info!(
            "MRP 計算完成：{} 筆物料記錄，耗時 {:?}",
            item_plans.len(),
            elapsed
        );

        Ok(MrpResult {
            master_available,
            item_plans,
            calculation_time_ms: Some(elapsed.as_millis()),
        })
    }

    /// 獲取 BOM 圖引用
    pub fn bom(&self) -> &BomGraph {
        &self.bom
    }

    /// 獲取物料參數引用
    pub fn config(&self, item_id: &str) -> Option<&ItemParams> {
        self.configs.get(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn two_level_calculator() -> MrpCalculator {
        let mut bom = BomGraph::new();
        bom.add_edge(
            ComponentId::new("SKATEBOARD-001"),
            ComponentId::new("WHEEL-001"),
            Decimal::from(4),
        )
        .unwrap();

        let mut configs = HashMap::new();
        configs.insert(
            "WHEEL-001".to_string(),
            ItemParams::new("WHEEL-001", 2, Decimal::from(400))
                .with_initial_on_hand(Decimal::from(10)),
        );

        MrpCalculator::new(bom, configs)
    }

    fn schedule_with_production(production: &[i64]) -> MasterSchedule {
        MasterSchedule::new(
            "SKATEBOARD-001",
            PeriodSeries::zeros(production.len()),
            PeriodSeries::from_ints(production),
        )
        .with_initial_on_hand(Decimal::from(2))
        .with_lead_time(1)
    }

    #[test]
    fn test_two_level_chain() {
        let calculator = two_level_calculator();
        let schedule = schedule_with_production(&[0, 0, 0, 0, 0, 30, 0, 0, 0, 0]);

        let result = calculator.calculate(&schedule, &HashMap::new()).unwrap();

        assert_eq!(result.item_plans.len(), 1);
        let wheel = result.item_plan("WHEEL-001").unwrap();
        // 生產 30 × 用量 4，位移 1 期 → 第 4 期總需求 120
        assert_eq!(wheel.gross_requirements.get(4), Decimal::from(120));
        assert_eq!(wheel.net_requirements.get(4), Decimal::from(110));
        assert_eq!(wheel.planned_order_receipts.get(4), Decimal::from(400));
        assert_eq!(wheel.planned_order_releases.get(2), Decimal::from(400));
    }

    #[test]
    fn test_missing_config_rejected() {
        let calculator = MrpCalculator::new(two_level_calculator().bom.clone(), HashMap::new());
        let schedule = schedule_with_production(&[0, 0, 0, 0, 0, 30, 0, 0, 0, 0]);

        let err = calculator.calculate(&schedule, &HashMap::new()).unwrap_err();
        assert!(matches!(err, MrpError::ConfigNotFound(id) if id == "WHEEL-001"));
    }

    #[test]
    fn test_schedule_item_must_be_root() {
        let calculator = two_level_calculator();
        let schedule = MasterSchedule::new(
            "WHEEL-001",
            PeriodSeries::zeros(10),
            PeriodSeries::zeros(10),
        );

        let err = calculator.calculate(&schedule, &HashMap::new()).unwrap_err();
        assert!(matches!(err, MrpError::UnknownMasterItem(id) if id == "WHEEL-001"));
    }

    #[test]
    fn test_cyclic_bom_rejected() {
        let mut bom = BomGraph::new();
        bom.add_edge(
            ComponentId::new("SKATEBOARD-001"),
            ComponentId::new("DECK-001"),
            Decimal::from(1),
        )
        .unwrap();
        bom.add_edge(
            ComponentId::new("DECK-001"),
            ComponentId::new("WHEEL-001"),
            Decimal::from(1),
        )
        .unwrap();
        bom.add_edge(
            ComponentId::new("WHEEL-001"),
            ComponentId::new("DECK-001"),
            Decimal::from(1),
        )
        .unwrap();

        let mut configs = HashMap::new();
        for id in ["DECK-001", "WHEEL-001"] {
            configs.insert(id.to_string(), ItemParams::new(id, 1, Decimal::from(10)));
        }
        let calculator = MrpCalculator::new(bom, configs);
        let schedule = schedule_with_production(&[0, 0, 10, 0, 0, 0, 0, 0, 0, 0]);

        let err = calculator.calculate(&schedule, &HashMap::new()).unwrap_err();
        assert!(matches!(err, MrpError::TopologicalSortError(_)));
    }
}
