//! BOM 圖

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BomError, ComponentId, Result};

/// BOM 邊：父件對子件的單位用量關係
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEdge {
    /// 父件ID
    pub parent_id: ComponentId,

    /// 子件ID
    pub child_id: ComponentId,

    /// 單位用量（每單位父件消耗的子件數量）
    pub quantity_per_unit: Decimal,
}

/// BOM 圖
///
/// 需求只沿邊的方向向下流動，不回饋。循環在拓撲排序時偵測。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BomGraph {
    edges: Vec<BomEdge>,
}

impl BomGraph {
    /// 創建空的 BOM 圖
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一條 BOM 邊
    pub fn add_edge(
        &mut self,
        parent_id: ComponentId,
        child_id: ComponentId,
        quantity_per_unit: Decimal,
    ) -> Result<()> {
        if parent_id == child_id {
            return Err(BomError::SelfReference(parent_id));
        }
        if quantity_per_unit <= Decimal::ZERO {
            return Err(BomError::NonPositiveQuantity {
                parent: parent_id,
                child: child_id,
            });
        }
        if self
            .edges
            .iter()
            .any(|e| e.parent_id == parent_id && e.child_id == child_id)
        {
            return Err(BomError::DuplicateEdge {
                parent: parent_id,
                child: child_id,
            });
        }

        self.edges.push(BomEdge {
            parent_id,
            child_id,
            quantity_per_unit,
        });
        Ok(())
    }

    /// 邊的數量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 節點數量
    pub fn node_count(&self) -> usize {
        self.components().len()
    }

    /// 圖中所有物料（依 ID 排序）
    pub fn components(&self) -> BTreeSet<ComponentId> {
        self.edges
            .iter()
            .flat_map(|e| [e.parent_id.clone(), e.child_id.clone()])
            .collect()
    }

    /// 指定父件的所有子件及其單位用量
    pub fn children<'a>(
        &'a self,
        parent: &'a ComponentId,
    ) -> impl Iterator<Item = (&'a ComponentId, Decimal)> + 'a {
        self.edges
            .iter()
            .filter(move |e| &e.parent_id == parent)
            .map(|e| (&e.child_id, e.quantity_per_unit))
    }

    /// 指定子件的所有父件及其單位用量
    pub fn parents<'a>(
        &'a self,
        child: &'a ComponentId,
    ) -> impl Iterator<Item = (&'a ComponentId, Decimal)> + 'a {
        self.edges
            .iter()
            .filter(move |e| &e.child_id == child)
            .map(|e| (&e.parent_id, e.quantity_per_unit))
    }

    /// 是否為根節點（不作為任何邊的子件）
    pub fn is_root(&self, id: &ComponentId) -> bool {
        self.edges.iter().any(|e| &e.parent_id == id)
            && !self.edges.iter().any(|e| &e.child_id == id)
    }

    /// 拓撲排序（父件在前，子件在後）
    ///
    /// 同層節點按物料 ID 排序，結果是確定性的。
    pub fn topological_sort(&self) -> Result<Vec<ComponentId>> {
        let components = self.components();

        let mut in_degree: BTreeMap<&ComponentId, usize> =
            components.iter().map(|c| (c, 0)).collect();
        for edge in &self.edges {
            *in_degree.get_mut(&edge.child_id).expect("邊的子件必在節點集中") += 1;
        }

        let mut ready: BTreeSet<&ComponentId> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut sorted = Vec::with_capacity(components.len());
        while let Some(&next) = ready.iter().next() {
            ready.remove(next);
            sorted.push(next.clone());

            for (child, _) in self.children(next) {
                let degree = in_degree.get_mut(child).expect("邊的子件必在節點集中");
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(child);
                }
            }
        }

        if sorted.len() != components.len() {
            return Err(BomError::CycleDetected);
        }
        Ok(sorted)
    }
}
