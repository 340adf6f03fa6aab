//! 边列表表示
//!
//! 顶点集合 + 扁平的边列表。所有边查找都是对列表的线性扫描，
//! 适合边数较少或以遍历全部边为主的场景。
//!
//! | 操作 | 复杂度 |
//! |------|--------|
//! | `add` | O(1) |
//! | `set` | O(E) |
//! | `remove` | O(V + E) |
//! | `sources` / `targets` | O(E) |

use super::edge::Edge;
use super::{check_edges, write_graph, Graph};
use crate::error::Result;
use crate::types::{validate_weight, GraphKind, VertexLabel, Weight};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace, warn};

/// 基于边列表的有向带权图
///
/// 边按插入顺序保存，更新权重时原地修改，不改变其位置。
#[derive(Debug, Clone)]
pub struct EdgeListGraph<V> {
    /// 顶点集合（保持插入顺序）
    vertices: IndexSet<V>,
    /// 边列表
    edges: Vec<Edge<V>>,
}

impl<V: VertexLabel> EdgeListGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    fn position(&self, source: &V, target: &V) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }
}

impl<V: VertexLabel> Default for EdgeListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLabel> Graph<V> for EdgeListGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        let added = self.vertices.insert(vertex);
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

        let previous = match self.position(&source, &target) {
            Some(idx) => {
                let previous = self.edges[idx].weight();
                if weight == 0 {
                    self.edges.remove(idx);
                    debug!(previous, "删除边");
                } else {
                    self.edges[idx].set_weight(weight)?;
                    debug!(previous, weight, "更新边权重");
                }
                previous
            }
            None => {
                if weight > 0 {
                    self.edges
                        .push(Edge::from_parts(source.clone(), target.clone(), weight));
                    debug!(weight, edges = self.edges.len(), "创建边");
                }
                0
            }
        };

        self.vertices.insert(source);
        self.vertices.insert(target);

        debug_assert!(self.check_invariants().is_ok());
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        debug!(
            removed_edges = before - self.edges.len(),
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
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        trace!("查询出边");
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn vertex_list(&self) -> Vec<V> {
        self.vertices.iter().cloned().collect()
    }

    fn edges(&self) -> Vec<Edge<V>> {
        self.edges.clone()
    }

    fn check_invariants(&self) -> Result<()> {
        check_edges(
            &self.vertices,
            self.edges
                .iter()
                .map(|e| (e.source(), e.target(), e.weight())),
        )
    }

    fn kind(&self) -> GraphKind {
        GraphKind::EdgeList
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn weight(&self, source: &V, target: &V) -> Weight {
        self.position(source, target)
            .map(|idx| self.edges[idx].weight())
            .unwrap_or(0)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V: VertexLabel + fmt::Display> fmt::Display for EdgeListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_graph(
            f,
            self.vertices.iter(),
            self.edges
                .iter()
                .map(|e| (e.source(), e.target(), e.weight())),
        )
    }
}
