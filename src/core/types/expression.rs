//! 表达式类型定义
//!
//! 优化器中谓词、连接条件和投影使用的表达式树。表达式树由绑定阶段构造，
//! 构造后不可变且无环。

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::operators::{BinaryOperator, UnaryOperator};
use crate::core::types::{ColumnId, DatabaseId, TableId};
use crate::core::Value;

/// 已解析的列引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub database_id: DatabaseId,
    pub table_id: TableId,
    pub column_id: ColumnId,
}

impl ColumnRef {
    pub fn new(database_id: DatabaseId, table_id: TableId, column_id: ColumnId) -> Self {
        Self {
            database_id,
            table_id,
            column_id,
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.database_id, self.table_id, self.column_id)
    }
}

/// 数据类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Integer,
    BigInt,
    Decimal,
    Varchar,
    Date,
    Timestamp,
}

/// 表达式树
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    // 字面量
    Literal(Value),

    // 列引用
    Column(ColumnRef),

    // 二元操作
    Binary {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    // 一元操作
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    // 函数调用
    Function {
        name: String,
        args: Vec<Expression>,
    },

    // 类型转换
    TypeCast {
        expr: Box<Expression>,
        target_type: DataType,
    },

    // NULLIF(left, right)
    NullIf {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    // EXISTS (子查询)
    Exists(Box<Expression>),
}

/// 表达式节点的扁平分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionType {
    ValueConstant,
    ColumnValue,
    OperatorUnaryMinus,
    OperatorNot,
    OperatorPlus,
    OperatorMinus,
    OperatorMultiply,
    OperatorDivide,
    OperatorConcat,
    OperatorMod,
    OperatorCast,
    OperatorIsNull,
    OperatorIsNotNull,
    OperatorExists,
    OperatorNullIf,
    CompareEqual,
    CompareNotEqual,
    CompareLessThan,
    CompareLessThanOrEqualTo,
    CompareGreaterThan,
    CompareGreaterThanOrEqualTo,
    CompareLike,
    ConjunctionAnd,
    ConjunctionOr,
    Function,
}

impl ExpressionType {
    /// 是否属于按操作符计算 CPU 代价的节点类型
    ///
    /// 函数调用不在其中，其代价暂未建模。
    pub fn is_costed_operator(&self) -> bool {
        matches!(
            self,
            ExpressionType::OperatorUnaryMinus
                | ExpressionType::OperatorPlus
                | ExpressionType::OperatorMinus
                | ExpressionType::OperatorMultiply
                | ExpressionType::OperatorDivide
                | ExpressionType::OperatorConcat
                | ExpressionType::OperatorMod
                | ExpressionType::OperatorCast
                | ExpressionType::OperatorIsNull
                | ExpressionType::OperatorIsNotNull
                | ExpressionType::OperatorExists
                | ExpressionType::OperatorNullIf
                | ExpressionType::CompareEqual
        )
    }
}

impl Expression {
    /// 创建字面量表达式
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// 创建列引用表达式
    pub fn column(database_id: DatabaseId, table_id: TableId, column_id: ColumnId) -> Self {
        Expression::Column(ColumnRef::new(database_id, table_id, column_id))
    }

    /// 创建二元操作表达式
    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// 创建等值比较表达式
    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Equal, right)
    }

    /// 创建逻辑与表达式
    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::And, right)
    }

    /// 创建一元操作表达式
    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// 创建函数调用表达式
    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function {
            name: name.into(),
            args,
        }
    }

    /// 创建类型转换表达式
    pub fn cast(expr: Expression, target_type: DataType) -> Self {
        Expression::TypeCast {
            expr: Box::new(expr),
            target_type,
        }
    }

    /// 创建 NULLIF 表达式
    pub fn null_if(left: Expression, right: Expression) -> Self {
        Expression::NullIf {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// 创建 EXISTS 表达式
    pub fn exists(subquery: Expression) -> Self {
        Expression::Exists(Box::new(subquery))
    }

    /// 节点自身的分类
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Expression::Literal(_) => ExpressionType::ValueConstant,
            Expression::Column(_) => ExpressionType::ColumnValue,
            Expression::Binary { op, .. } => match op {
                BinaryOperator::Add => ExpressionType::OperatorPlus,
                BinaryOperator::Subtract => ExpressionType::OperatorMinus,
                BinaryOperator::Multiply => ExpressionType::OperatorMultiply,
                BinaryOperator::Divide => ExpressionType::OperatorDivide,
                BinaryOperator::Modulo => ExpressionType::OperatorMod,
                BinaryOperator::StringConcat => ExpressionType::OperatorConcat,
                BinaryOperator::Equal => ExpressionType::CompareEqual,
                BinaryOperator::NotEqual => ExpressionType::CompareNotEqual,
                BinaryOperator::LessThan => ExpressionType::CompareLessThan,
                BinaryOperator::LessThanOrEqual => ExpressionType::CompareLessThanOrEqualTo,
                BinaryOperator::GreaterThan => ExpressionType::CompareGreaterThan,
                BinaryOperator::GreaterThanOrEqual => ExpressionType::CompareGreaterThanOrEqualTo,
                BinaryOperator::Like => ExpressionType::CompareLike,
                BinaryOperator::And => ExpressionType::ConjunctionAnd,
                BinaryOperator::Or => ExpressionType::ConjunctionOr,
            },
            Expression::Unary { op, .. } => match op {
                UnaryOperator::Minus => ExpressionType::OperatorUnaryMinus,
                UnaryOperator::Not => ExpressionType::OperatorNot,
                UnaryOperator::IsNull => ExpressionType::OperatorIsNull,
                UnaryOperator::IsNotNull => ExpressionType::OperatorIsNotNull,
            },
            Expression::Function { .. } => ExpressionType::Function,
            Expression::TypeCast { .. } => ExpressionType::OperatorCast,
            Expression::NullIf { .. } => ExpressionType::OperatorNullIf,
            Expression::Exists(_) => ExpressionType::OperatorExists,
        }
    }

    /// 直接子表达式，按从左到右的顺序
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Literal(_) | Expression::Column(_) => Vec::new(),
            Expression::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expression::Unary { operand, .. } => vec![operand.as_ref()],
            Expression::Function { args, .. } => args.iter().collect(),
            Expression::TypeCast { expr, .. } => vec![expr.as_ref()],
            Expression::NullIf { left, right } => vec![left.as_ref(), right.as_ref()],
            Expression::Exists(subquery) => vec![subquery.as_ref()],
        }
    }

    /// 获取指定位置的子表达式
    pub fn child(&self, index: usize) -> Option<&Expression> {
        self.children().into_iter().nth(index)
    }

    /// 若为列引用则返回该列
    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Expression::Column(col) => Some(col),
            _ => None,
        }
    }

    /// 表达式树深度（叶子为 1）
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Expression::depth)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(v) => write!(f, "{}", v),
            Expression::Column(col) => write!(f, "{}", col),
            Expression::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Unary { op, operand } => match op {
                UnaryOperator::IsNull | UnaryOperator::IsNotNull => {
                    write!(f, "({} {})", operand, op)
                }
                _ => write!(f, "({} {})", op, operand),
            },
            Expression::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expression::TypeCast { expr, target_type } => {
                write!(f, "CAST({} AS {:?})", expr, target_type)
            }
            Expression::NullIf { left, right } => write!(f, "NULLIF({}, {})", left, right),
            Expression::Exists(subquery) => write!(f, "EXISTS({})", subquery),
        }
    }
}

/// 带注解的表达式
///
/// 连接谓词等表达式附带其引用的表别名集合。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedExpression {
    expr: Expression,
    table_alias_set: BTreeSet<String>,
}

impl AnnotatedExpression {
    pub fn new<I, S>(expr: Expression, table_aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expr,
            table_alias_set: table_aliases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn table_alias_set(&self) -> &BTreeSet<String> {
        &self.table_alias_set
    }
}

impl From<Expression> for AnnotatedExpression {
    fn from(expr: Expression) -> Self {
        Self {
            expr,
            table_alias_set: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(table: u32) -> Expression {
        Expression::column(DatabaseId::new(1), TableId::new(table), ColumnId::new(1))
    }

    #[test]
    fn test_expression_type_classification() {
        assert_eq!(
            Expression::eq(col(1), col(2)).expression_type(),
            ExpressionType::CompareEqual
        );
        assert_eq!(
            Expression::cast(col(1), DataType::BigInt).expression_type(),
            ExpressionType::OperatorCast
        );
        assert_eq!(
            Expression::function("lower", vec![col(1)]).expression_type(),
            ExpressionType::Function
        );
        assert_eq!(col(1).expression_type(), ExpressionType::ColumnValue);
    }

    #[test]
    fn test_costed_operator_set() {
        assert!(ExpressionType::CompareEqual.is_costed_operator());
        assert!(ExpressionType::OperatorNullIf.is_costed_operator());
        assert!(!ExpressionType::CompareLessThan.is_costed_operator());
        assert!(!ExpressionType::ConjunctionAnd.is_costed_operator());
        assert!(!ExpressionType::Function.is_costed_operator());
    }

    #[test]
    fn test_children_and_depth() {
        let expr = Expression::and(
            Expression::eq(col(1), col(2)),
            Expression::unary(UnaryOperator::IsNull, col(3)),
        );
        assert_eq!(expr.children().len(), 2);
        assert_eq!(expr.depth(), 3);
        assert_eq!(expr.child(0).map(Expression::expression_type), Some(ExpressionType::CompareEqual));
        assert!(expr.child(2).is_none());
    }

    #[test]
    fn test_as_column() {
        let c = col(4);
        assert_eq!(c.as_column().map(|c| c.table_id), Some(TableId::new(4)));
        assert!(Expression::literal(1).as_column().is_none());
    }

    #[test]
    fn test_display() {
        let expr = Expression::eq(col(1), Expression::literal(5));
        assert_eq!(expr.to_string(), "(db#1.table#1.col#1 = 5)");
    }

    #[test]
    fn test_annotated_expression() {
        let annotated = AnnotatedExpression::new(Expression::eq(col(1), col(2)), ["a", "b"]);
        assert_eq!(annotated.table_alias_set().len(), 2);
        assert!(annotated.table_alias_set().contains("a"));
    }
}
