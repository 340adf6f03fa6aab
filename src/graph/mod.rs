//! 图核心模块
//!
//! 定义有向带权图的统一接口 [`Graph`] 以及两种可互换的存储表示：
//! - [`EdgeListGraph`]：顶点集合 + 扁平的边列表，查询为线性扫描
//! - [`AdjacencyMapGraph`]：顶点集合 + 出边映射，`targets` 为直接查找
//!
//! 两种表示对外行为完全一致，调用方在构造时选择其一。
//!
//! 所有实现在每次修改后都满足以下不变式：
//! - 每条边的源和目标都属于顶点集合
//! - 存储中的边权重恒为正（权重 0 即“无边”）
//! - 每个有序顶点对 (source, target) 至多一条边

mod adjacency_map;
mod edge;
mod edge_list;

#[cfg(test)]
mod conformance;

pub use adjacency_map::AdjacencyMapGraph;
pub use edge::Edge;
pub use edge_list::EdgeListGraph;

use crate::error::{Error, Result};
use crate::types::{GraphKind, VertexLabel, Weight};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 可变有向带权图
///
/// 查询结果都是拥有所有权的快照，之后对图的修改不会影响已返回的结果，
/// 反之亦然。
pub trait Graph<V: VertexLabel> {
    /// 插入顶点，新插入返回 true，已存在返回 false
    fn add(&mut self, vertex: V) -> bool;

    /// 设置边 source -> target 的权重，返回旧权重（不存在时为 0）
    ///
    /// - `weight > 0`：创建或更新边
    /// - `weight == 0`：删除边（若存在）
    /// - `weight < 0`：返回 [`Error::InvalidWeight`]，图不发生任何变化
    ///
    /// 两个端点若不在图中会被自动加入。
    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight>;

    /// 删除顶点及其所有入边和出边，顶点存在返回 true
    fn remove(&mut self, vertex: &V) -> bool;

    /// 顶点集合快照
    fn vertices(&self) -> HashSet<V>;

    /// 所有指向 `target` 的边：源顶点 -> 权重
    fn sources(&self, target: &V) -> HashMap<V, Weight>;

    /// 所有从 `source` 出发的边：目标顶点 -> 权重
    fn targets(&self, source: &V) -> HashMap<V, Weight>;

    /// 按内部存储顺序列出顶点
    fn vertex_list(&self) -> Vec<V>;

    /// 按内部存储顺序列出所有边
    fn edges(&self) -> Vec<Edge<V>>;

    /// 校验内部表示的不变式
    fn check_invariants(&self) -> Result<()>;

    /// 存储表示类型
    fn kind(&self) -> GraphKind;

    /// 顶点是否存在
    fn contains(&self, vertex: &V) -> bool {
        self.vertices().contains(vertex)
    }

    /// 边 source -> target 的权重，不存在时为 0
    fn weight(&self, source: &V, target: &V) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// 顶点数量
    fn vertex_count(&self) -> usize {
        self.vertex_list().len()
    }

    /// 边数量
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// 诊断用文本表示，与 `Display` 输出一致
    fn render(&self) -> String
    where
        V: fmt::Display,
    {
        let vertices = self.vertex_list();
        let edges = self.edges();
        let mut out = String::new();
        // 写入 String 不会失败
        let _ = write_graph(
            &mut out,
            vertices.iter(),
            edges.iter().map(|e| (e.source(), e.target(), e.weight())),
        );
        out
    }
}

impl GraphKind {
    /// 按表示类型构造一个空图
    pub fn build<V: VertexLabel + 'static>(&self) -> Box<dyn Graph<V>> {
        match self {
            GraphKind::EdgeList => Box::new(EdgeListGraph::new()),
            GraphKind::AdjacencyMap => Box::new(AdjacencyMapGraph::new()),
        }
    }
}

/// 输出格式：
///
/// ```text
/// Vertices: [A, B]
/// Edges:
/// A -> B : 10
/// ```
pub(crate) fn write_graph<'a, V, W>(
    out: &mut W,
    vertices: impl IntoIterator<Item = &'a V>,
    edges: impl IntoIterator<Item = (&'a V, &'a V, Weight)>,
) -> fmt::Result
where
    V: fmt::Display + 'a,
    W: fmt::Write,
{
    out.write_str("Vertices: [")?;
    for (i, v) in vertices.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", v)?;
    }
    out.write_str("]\nEdges:\n")?;
    for (source, target, weight) in edges {
        writeln!(out, "{} -> {} : {}", source, target, weight)?;
    }
    Ok(())
}

/// 两种表示共用的边校验
pub(crate) fn check_edges<'a, V>(
    vertices: &IndexSet<V>,
    edges: impl IntoIterator<Item = (&'a V, &'a V, Weight)>,
) -> Result<()>
where
    V: VertexLabel + 'a,
{
    let mut seen: HashSet<(&V, &V)> = HashSet::new();
    for (i, (source, target, weight)) in edges.into_iter().enumerate() {
        if weight <= 0 {
            return Err(Error::InvariantViolation(format!(
                "第 {} 条边的权重为 {}，存储中的权重必须为正",
                i, weight
            )));
        }
        if !vertices.contains(source) || !vertices.contains(target) {
            return Err(Error::InvariantViolation(format!(
                "第 {} 条边的端点不在顶点集合中",
                i
            )));
        }
        if !seen.insert((source, target)) {
            return Err(Error::InvariantViolation(format!(
                "第 {} 条边与已有边的有序顶点对重复",
                i
            )));
        }
    }
    Ok(())
}
