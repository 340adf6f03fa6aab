//! 通用类型定义

use crate::error::{Error, Result};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// 边权重
///
/// 存储中的权重恒为正；0 表示“无边”，负数会被拒绝。
pub type Weight = i64;

/// 顶点标签
///
/// 任何可克隆、可比较相等、可哈希的类型都可以作为顶点。
pub trait VertexLabel: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> VertexLabel for T {}

/// 校验权重是否合法（非负）
pub fn validate_weight(weight: Weight) -> Result<Weight> {
    if weight < 0 {
        return Err(Error::InvalidWeight(weight));
    }
    Ok(weight)
}

/// 图的存储表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphKind {
    /// 边列表
    EdgeList,
    /// 邻接映射
    #[default]
    AdjacencyMap,
}

impl GraphKind {
    pub const ALL: [GraphKind; 2] = [GraphKind::EdgeList, GraphKind::AdjacencyMap];

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::EdgeList => "edge-list",
            GraphKind::AdjacencyMap => "adjacency-map",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "edge-list" | "edgelist" | "edges" => Ok(GraphKind::EdgeList),
            "adjacency-map" | "adjacencymap" | "adjacency" | "map" => Ok(GraphKind::AdjacencyMap),
            other => Err(Error::UnknownGraphKind(other.to_string())),
        }
    }
}
