//! 邻接映射表示
//!
//! 顶点集合 + 每个顶点的出边映射（邻居 -> 权重）。
//! 出边查询是直接查找；没有反向索引，入边查询需要扫描全部出边映射。

use super::edge::Edge;
use super::{check_edges, write_graph, Graph};
use crate::error::{Error, Result};
use crate::types::{validate_weight, GraphKind, VertexLabel, Weight};
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace, warn};

/// 基于邻接映射的有向带权图
///
/// ### 复杂度
/// | 操作 | 复杂度 | 说明 |
/// |------|--------|------|
/// | `add` | O(1) | 同时创建空的出边映射 |
/// | `set` | O(1) 均摊 | 直接查找源顶点的出边映射 |
/// | `targets` | O(出度) | 复制出边映射 |
/// | `sources` | O(V + E) | 扫描所有出边映射 |
/// | `remove` | O(V + E) | 需要从其余顶点的出边映射中剔除 |
#[derive(Debug, Clone)]
pub struct AdjacencyMapGraph<V> {
    /// 顶点集合（保持插入顺序）
    vertices: IndexSet<V>,
    /// 出边映射：源顶点 -> (目标顶点 -> 权重)
    ///
    /// 每个顶点都有一个（可能为空的）条目。
    edges: IndexMap<V, IndexMap<V, Weight>>,
}

impl<V: VertexLabel> AdjacencyMapGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    /// 插入顶点并保证其出边映射存在
    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        self.vertices.insert(vertex.clone());
        self.edges.insert(vertex, IndexMap::new());
        true
    }

    fn iter_edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> {
        self.edges
            .iter()
            .flat_map(|(source, out)| out.iter().map(move |(target, &w)| (source, target, w)))
    }
}

impl<V: VertexLabel> Default for AdjacencyMapGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLabel> Graph<V> for AdjacencyMapGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        let added = self.insert_vertex(vertex);
        if added {
            debug!(vertices = self.vertices.len(), "添加顶点");
        }
        debug_assert!(self.check_invariants().is_ok());
        added
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        let weight = validate_weight(weight).inspect_err(|_| {
            warn!(weight, "拒绝负权重");
        })?;

        self.insert_vertex(source.clone());
        self.insert_vertex(target.clone());

        let out = self
            .edges
            .get_mut(&source)
            .ok_or_else(|| Error::InvariantViolation("源顶点缺少出边映射".to_string()))?;

        let previous = if weight == 0 {
            let previous = out.shift_remove(&target);
            if let Some(previous) = previous {
                debug!(previous, "删除边");
            }
            previous
        } else {
            let previous = out.insert(target, weight);
            match previous {
                Some(previous) => debug!(previous, weight, "更新边权重"),
                None => debug!(weight, "创建边"),
            }
            previous
        };

        debug_assert!(self.check_invariants().is_ok());
        Ok(previous.unwrap_or(0))
    }

    fn remove(&mut self, vertex: &V) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let outgoing = self.edges.shift_remove(vertex).map_or(0, |out| out.len());
        let mut incoming = 0;
        for out in self.edges.values_mut() {
            if out.shift_remove(vertex).is_some() {
                incoming += 1;
            }
        }
        debug!(
            outgoing,
            incoming,
            vertices = self.vertices.len(),
            "删除顶点"
        );

        debug_assert!(self.check_invariants().is_ok());
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        trace!("查询入边");
        self.edges
            .iter()
            .filter_map(|(source, out)| out.get(target).map(|&w| (source.clone(), w)))
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        trace!("查询出边");
        self.edges
            .get(source)
            .map(|out| out.iter().map(|(t, &w)| (t.clone(), w)).collect())
            .unwrap_or_default()
    }

    fn vertex_list(&self) -> Vec<V> {
        self.vertices.iter().cloned().collect()
    }

    fn edges(&self) -> Vec<Edge<V>> {
        self.iter_edges()
            .map(|(s, t, w)| Edge::from_parts(s.clone(), t.clone(), w))
            .collect()
    }

    fn check_invariants(&self) -> Result<()> {
        if let Some(missing) = self.vertices.iter().position(|v| !self.edges.contains_key(v)) {
            return Err(Error::InvariantViolation(format!(
                "第 {} 个顶点缺少出边映射",
                missing
            )));
        }
        if self.edges.len() != self.vertices.len() {
            return Err(Error::InvariantViolation(format!(
                "出边映射数 {} 与顶点数 {} 不一致",
                self.edges.len(),
                self.vertices.len()
            )));
        }
        check_edges(&self.vertices, self.iter_edges())
    }

    fn kind(&self) -> GraphKind {
        GraphKind::AdjacencyMap
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn weight(&self, source: &V, target: &V) -> Weight {
        self.edges
            .get(source)
            .and_then(|out| out.get(target))
            .copied()
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|out| out.len()).sum()
    }
}

impl<V: VertexLabel + fmt::Display> fmt::Display for AdjacencyMapGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(f, self.vertices.iter(), self.iter_edges())
    }
}
