//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::sync::Arc;

use costmodel::core::types::GroupId;
use costmodel::{
    CostCalculator, CostEstimate, CostModelConfig, CostResult, GroupExpression, Memo,
    PhysicalOperator, StatisticsManager,
};

use self::data_fixtures::{fixture_statistics, table_rows, JOIN_ROWS};
use costmodel::core::TableId;

/// 测试上下文
///
/// 持有测试统计信息、代价计算器与一个搜索空间
pub struct TestContext {
    pub stats: Arc<StatisticsManager>,
    pub calculator: CostCalculator,
    pub memo: Memo,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(CostModelConfig::default())
    }

    pub fn with_config(config: CostModelConfig) -> Self {
        let stats = Arc::new(fixture_statistics());
        let calculator = CostCalculator::with_config(stats.clone(), config);
        Self {
            stats,
            calculator,
            memo: Memo::new(),
        }
    }

    /// 创建一个输出行数为 rows 的叶子组
    pub fn leaf(&mut self, rows: f64) -> GroupId {
        let id = self.memo.add_group();
        self.memo.set_num_rows(id, rows).expect("写入行数失败");
        id
    }

    /// 创建一个输出行数等于表行数的叶子组
    pub fn table_leaf(&mut self, table: TableId) -> GroupId {
        self.leaf(table_rows(table))
    }

    /// 在新组中插入算子，返回组表达式
    pub fn insert(
        &mut self,
        op: PhysicalOperator,
        children: Vec<GroupId>,
        rows: Option<f64>,
    ) -> GroupExpression {
        let id = self
            .memo
            .insert_new_group(op, children)
            .expect("插入组表达式失败");
        if let Some(rows) = rows {
            self.memo.set_num_rows(id, rows).expect("写入行数失败");
        }
        self.memo
            .group_expression(id, 0)
            .cloned()
            .expect("组表达式不存在")
    }

    pub fn try_cost(
        &mut self,
        op: PhysicalOperator,
        children: Vec<GroupId>,
        rows: Option<f64>,
    ) -> CostResult<CostEstimate> {
        let expr = self.insert(op, children, rows);
        self.calculator.calculate_cost(&self.memo, &expr)
    }

    /// 计算算子代价，要求计算成功且有代价
    pub fn cost(&mut self, op: PhysicalOperator, children: Vec<GroupId>, rows: Option<f64>) -> f64 {
        assertions::assert_costed(assertions::assert_ok(self.try_cost(op, children, rows)))
    }

    /// 两表连接的代价，连接组输出 JOIN_ROWS 行
    pub fn join_cost(&mut self, op: PhysicalOperator, left: TableId, right: TableId) -> f64 {
        let left = self.table_leaf(left);
        let right = self.table_leaf(right);
        self.cost(op, vec![left, right], Some(JOIN_ROWS))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
