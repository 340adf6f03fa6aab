//! 边定义
//!
//! 有向带权边：(源顶点, 目标顶点, 权重)

use crate::error::Result;
use crate::types::{validate_weight, VertexLabel, Weight};
use std::fmt;

/// 有向带权边
///
/// 源和目标在创建后不可变，只有权重可以原地更新。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    /// 源顶点
    source: V,
    /// 目标顶点
    target: V,
    /// 权重
    weight: Weight,
}

impl<V: VertexLabel> Edge<V> {
    /// 创建新边
    pub fn new(source: V, target: V, weight: Weight) -> Result<Self> {
        let weight = validate_weight(weight)?;
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// 由已校验过的权重构造，仅供图内部使用
    pub(crate) fn from_parts(source: V, target: V, weight: Weight) -> Self {
        debug_assert!(weight >= 0);
        Self {
            source,
            target,
            weight,
        }
    }

    /// 获取源顶点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 获取目标顶点
    pub fn target(&self) -> &V {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 更新权重，返回旧权重
    pub fn set_weight(&mut self, weight: Weight) -> Result<Weight> {
        let weight = validate_weight(weight)?;
        Ok(std::mem::replace(&mut self.weight, weight))
    }

    /// 是否连接 (source, target) 这一有序对
    pub fn connects(&self, source: &V, target: &V) -> bool {
        &self.source == source && &self.target == target
    }

    /// 顶点是否为该边的端点
    pub fn touches(&self, vertex: &V) -> bool {
        &self.source == vertex || &self.target == vertex
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} : {}", self.source, self.target, self.weight)
    }
}
