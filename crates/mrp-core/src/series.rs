//! 期間數列模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 期間數列
///
/// 固定計劃時界下的每期數量，期間索引為 `0..horizon`。
/// 期間是抽象的整數刻度，不含任何日曆語義。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSeries {
    values: Vec<Decimal>,
}

impl PeriodSeries {
    /// 創建全零數列
    pub fn zeros(horizon: usize) -> Self {
        Self {
            values: vec![Decimal::ZERO; horizon],
        }
    }

    /// 從數值向量創建
    pub fn from_values(values: Vec<Decimal>) -> Self {
        Self { values }
    }

    /// 從整數切片創建
    pub fn from_ints(values: &[i64]) -> Self {
        Self {
            values: values.iter().map(|&v| Decimal::from(v)).collect(),
        }
    }

    /// 計劃時界（期間數）
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// 讀取指定期間的數值
    ///
    /// 期間必須小於計劃時界。
    pub fn get(&self, period: usize) -> Decimal {
        self.values[period]
    }

    /// 設置指定期間的數值
    pub fn set(&mut self, period: usize, value: Decimal) {
        self.values[period] = value;
    }

    /// 逐期累加另一條數列
    ///
    /// 兩條數列的計劃時界必須相同。
    pub fn accumulate(&mut self, other: &PeriodSeries) {
        debug_assert_eq!(self.horizon(), other.horizon());
        for (target, source) in self.values.iter_mut().zip(other.values.iter()) {
            *target += *source;
        }
    }

    /// 數值切片
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// 逐期迭代
    pub fn iter(&self) -> impl Iterator<Item = &Decimal> {
        self.values.iter()
    }

    /// 是否全為零
    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }
}

impl std::ops::Index<usize> for PeriodSeries {
    type Output = Decimal;

    fn index(&self, period: usize) -> &Decimal {
        &self.values[period]
    }
}
