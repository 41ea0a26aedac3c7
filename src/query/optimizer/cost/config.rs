//! 代价模型配置模块
//!
//! 提供可配置的代价参数，参考 PostgreSQL 的代价模型设计
//!
//! ## 使用示例
//!
//! ```rust
//! use costmodel::query::optimizer::cost::CostModelConfig;
//!
//! // 使用默认配置
//! let config = CostModelConfig::default();
//! assert_eq!(config.tuple_cpu_cost, 2.0);
//!
//! // 自定义配置
//! let custom_config = CostModelConfig::new()
//!     .with_tuple_cpu_cost(1.0)
//!     .with_operator_cpu_cost(0.5);
//! assert_eq!(custom_config.operator_cpu_cost, 0.5);
//! ```

use serde::{Deserialize, Serialize};

/// 代价模型配置
///
/// 定义各种操作的代价参数。代价没有物理单位，只有同一配置下
/// 不同计划之间的比较有意义。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModelConfig {
    /// 物化一行元组的 CPU 代价。默认值 2.0
    pub tuple_cpu_cost: f64,

    /// 执行一次操作符的 CPU 代价。默认值 2.0
    pub operator_cpu_cost: f64,

    /// 谓词求值的基础代价，即谓词代价累加的起点。默认值 1.0
    pub qualifier_base_cost: f64,

    /// 谓词树中每个节点的附加代价。默认值 0.0
    ///
    /// 取 1.0 时每个表达式节点都额外计入一次求值开销。
    pub qualifier_node_cost: f64,

    /// 哈希表装载因子，桶数 = 基数 / 装载因子。默认值 0.5
    pub hash_table_load_factor: f64,

    /// 哈希桶大小比例的下限。默认值 1e-6
    pub min_bucket_size_frac: f64,

    /// 谓词表达式树的最大深度。默认值 1024
    pub max_expression_depth: usize,
}

impl Default for CostModelConfig {
    fn default() -> Self {
        Self {
            tuple_cpu_cost: 2.0,
            operator_cpu_cost: 2.0,
            qualifier_base_cost: 1.0,
            qualifier_node_cost: 0.0,
            hash_table_load_factor: 0.5,
            min_bucket_size_frac: 1.0e-6,
            max_expression_depth: 1024,
        }
    }
}

impl CostModelConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置元组物化代价
    pub fn with_tuple_cpu_cost(mut self, cost: f64) -> Self {
        self.tuple_cpu_cost = cost;
        self
    }

    /// 设置操作符代价
    pub fn with_operator_cpu_cost(mut self, cost: f64) -> Self {
        self.operator_cpu_cost = cost;
        self
    }

    /// 设置谓词基础代价
    pub fn with_qualifier_base_cost(mut self, cost: f64) -> Self {
        self.qualifier_base_cost = cost;
        self
    }

    /// 设置谓词节点附加代价
    pub fn with_qualifier_node_cost(mut self, cost: f64) -> Self {
        self.qualifier_node_cost = cost;
        self
    }

    /// 设置哈希表装载因子
    pub fn with_hash_table_load_factor(mut self, load_factor: f64) -> Self {
        self.hash_table_load_factor = load_factor;
        self
    }

    /// 设置表达式最大深度
    pub fn with_max_expression_depth(mut self, depth: usize) -> Self {
        self.max_expression_depth = depth;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), String> {
        let non_negative = [
            ("tuple_cpu_cost", self.tuple_cpu_cost),
            ("operator_cpu_cost", self.operator_cpu_cost),
            ("qualifier_base_cost", self.qualifier_base_cost),
            ("qualifier_node_cost", self.qualifier_node_cost),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(format!("{} 必须为非负有限数，实际为 {}", name, value));
            }
        }
        if !(self.hash_table_load_factor > 0.0 && self.hash_table_load_factor <= 1.0) {
            return Err(format!(
                "hash_table_load_factor 必须在 (0, 1] 内，实际为 {}",
                self.hash_table_load_factor
            ));
        }
        if !(self.min_bucket_size_frac > 0.0 && self.min_bucket_size_frac <= 1.0) {
            return Err(format!(
                "min_bucket_size_frac 必须在 (0, 1] 内，实际为 {}",
                self.min_bucket_size_frac
            ));
        }
        if self.max_expression_depth == 0 {
            return Err("max_expression_depth 必须大于 0".to_string());
        }
        Ok(())
    }
}
