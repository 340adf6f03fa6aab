//! 图接口一致性测试
//!
//! 同一组测试对每种表示各运行一次，测试只通过 [`Graph`] 接口访问图。

use super::{AdjacencyMapGraph, EdgeListGraph, Graph};
use crate::error::Error;
use crate::types::{GraphKind, Weight};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

fn set_of(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn map_of(items: &[(&str, Weight)]) -> HashMap<String, Weight> {
    items.iter().map(|(k, w)| (k.to_string(), *w)).collect()
}

fn s(v: &str) -> String {
    v.to_string()
}

pub(super) fn initial_vertices_empty(graph: &mut dyn Graph<String>) {
    assert!(graph.vertices().is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

pub(super) fn add_vertex(graph: &mut dyn Graph<String>) {
    assert!(graph.add(s("A")));
    assert!(graph.vertices().contains("A"));
    assert!(graph.contains(&s("A")));
}

pub(super) fn add_duplicate_vertex(graph: &mut dyn Graph<String>) {
    graph.add(s("A"));
    let before = graph.vertices();
    assert!(!graph.add(s("A")));
    assert_eq!(graph.vertices(), before);
}

pub(super) fn set_edge(graph: &mut dyn Graph<String>) {
    graph.add(s("A"));
    graph.add(s("B"));
    assert_eq!(graph.set(s("A"), s("B"), 5), Ok(0));
    assert_eq!(graph.sources(&s("B")).get("A"), Some(&5));
    assert_eq!(graph.targets(&s("A")).get("B"), Some(&5));
    assert_eq!(graph.weight(&s("A"), &s("B")), 5);
}

pub(super) fn update_edge_returns_previous(graph: &mut dyn Graph<String>) {
    assert_eq!(graph.set(s("A"), s("B"), 5), Ok(0));
    assert_eq!(graph.set(s("A"), s("B"), 8), Ok(5));
    assert_eq!(graph.targets(&s("A")), map_of(&[("B", 8)]));
    assert_eq!(graph.sources(&s("B")), map_of(&[("A", 8)]));
    assert_eq!(graph.edge_count(), 1);
}

pub(super) fn zero_weight_removes_edge(graph: &mut dyn Graph<String>) {
    graph.set(s("A"), s("B"), 7).unwrap();
    assert_eq!(graph.set(s("A"), s("B"), 0), Ok(7));
    assert!(!graph.targets(&s("A")).contains_key("B"));
    assert!(!graph.sources(&s("B")).contains_key("A"));
    assert_eq!(graph.vertices(), set_of(&["A", "B"]));

    // 边已不存在，再次删除是空操作
    assert_eq!(graph.set(s("A"), s("B"), 0), Ok(0));
    assert_eq!(graph.edge_count(), 0);
}

pub(super) fn zero_weight_on_missing_edge_adds_vertices(graph: &mut dyn Graph<String>) {
    assert_eq!(graph.set(s("X"), s("Y"), 0), Ok(0));
    assert_eq!(graph.vertices(), set_of(&["X", "Y"]));
    assert!(graph.targets(&s("X")).is_empty());
    assert!(graph.sources(&s("Y")).is_empty());
}

pub(super) fn negative_weight_rejected(graph: &mut dyn Graph<String>) {
    graph.set(s("A"), s("B"), 3).unwrap();
    let vertices = graph.vertices();
    let edges = graph.edges();

    assert_eq!(graph.set(s("C"), s("D"), -1), Err(Error::InvalidWeight(-1)));
    assert_eq!(graph.set(s("A"), s("B"), -5), Err(Error::InvalidWeight(-5)));

    assert_eq!(graph.vertices(), vertices);
    assert_eq!(graph.edges(), edges);
    assert_eq!(graph.weight(&s("A"), &s("B")), 3);
}

pub(super) fn set_creates_missing_endpoints(graph: &mut dyn Graph<String>) {
    assert_eq!(graph.set(s("A"), s("B"), 5), Ok(0));
    assert_eq!(graph.vertices(), set_of(&["A", "B"]));
}

pub(super) fn self_loop(graph: &mut dyn Graph<String>) {
    assert_eq!(graph.set(s("A"), s("A"), 2), Ok(0));
    assert_eq!(graph.vertices(), set_of(&["A"]));
    assert_eq!(graph.sources(&s("A")), map_of(&[("A", 2)]));
    assert_eq!(graph.targets(&s("A")), map_of(&[("A", 2)]));

    assert!(graph.remove(&s("A")));
    assert!(graph.vertices().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

pub(super) fn remove_vertex(graph: &mut dyn Graph<String>) {
    graph.add(s("A"));
    graph.add(s("B"));
    graph.set(s("A"), s("B"), 5).unwrap();
    assert!(graph.remove(&s("A")));
    assert!(!graph.vertices().contains("A"));
    assert!(!graph.sources(&s("B")).contains_key("A"));
}

pub(super) fn remove_cascades_incident_edges(graph: &mut dyn Graph<String>) {
    graph.set(s("A"), s("B"), 1).unwrap();
    graph.set(s("B"), s("C"), 2).unwrap();
    graph.set(s("C"), s("B"), 3).unwrap();
    graph.set(s("A"), s("C"), 4).unwrap();
    graph.set(s("B"), s("B"), 5).unwrap();

    assert!(graph.remove(&s("B")));
    assert_eq!(graph.vertices(), set_of(&["A", "C"]));
    for v in graph.vertices() {
        assert!(!graph.sources(&v).contains_key("B"));
        assert!(!graph.targets(&v).contains_key("B"));
    }
    assert!(graph.sources(&s("B")).is_empty());
    assert!(graph.targets(&s("B")).is_empty());
    assert_eq!(graph.targets(&s("A")), map_of(&[("C", 4)]));
    assert_eq!(graph.edge_count(), 1);
}

pub(super) fn remove_absent_is_noop(graph: &mut dyn Graph<String>) {
    graph.set(s("A"), s("B"), 1).unwrap();
    let vertices = graph.vertex_list();
    let edges = graph.edges();

    assert!(!graph.remove(&s("Z")));
    assert_eq!(graph.vertex_list(), vertices);
    assert_eq!(graph.edges(), edges);
}

pub(super) fn sources_and_targets(graph: &mut dyn Graph<String>) {
    graph.add(s("A"));
    graph.add(s("B"));
    graph.set(s("A"), s("B"), 3).unwrap();

    let sources = graph.sources(&s("B"));
    let targets = graph.targets(&s("A"));

    assert_eq!(sources.len(), 1);
    assert_eq!(targets.len(), 1);
    assert_eq!(sources.get("A"), Some(&3));
    assert_eq!(targets.get("B"), Some(&3));
}

pub(super) fn queries_on_absent_vertex_are_empty(graph: &mut dyn Graph<String>) {
    graph.set(s("A"), s("B"), 3).unwrap();
    assert!(graph.sources(&s("Q")).is_empty());
    assert!(graph.targets(&s("Q")).is_empty());
    assert_eq!(graph.weight(&s("Q"), &s("A")), 0);
    assert!(!graph.contains(&s("Q")));
}

pub(super) fn snapshots_are_independent(graph: &mut dyn Graph<String>) {
    graph.set(s("A"), s("B"), 3).unwrap();
    let mut vertices = graph.vertices();
    let mut targets = graph.targets(&s("A"));
    let mut sources = graph.sources(&s("B"));

    // 修改快照不影响图
    vertices.insert(s("Z"));
    targets.insert(s("Z"), 99);
    sources.clear();
    assert_eq!(graph.vertices(), set_of(&["A", "B"]));
    assert_eq!(graph.targets(&s("A")), map_of(&[("B", 3)]));
    assert_eq!(graph.sources(&s("B")), map_of(&[("A", 3)]));

    // 修改图不影响快照
    let vertices = graph.vertices();
    let targets = graph.targets(&s("A"));
    graph.remove(&s("B"));
    graph.add(s("C"));
    assert_eq!(vertices, set_of(&["A", "B"]));
    assert_eq!(targets, map_of(&[("B", 3)]));
}

pub(super) fn end_to_end(graph: &mut dyn Graph<String>) {
    assert!(graph.add(s("A")));
    assert!(graph.add(s("B")));
    assert_eq!(graph.set(s("A"), s("B"), 10), Ok(0));
    assert_eq!(graph.sources(&s("B")), map_of(&[("A", 10)]));
    assert_eq!(graph.targets(&s("A")), map_of(&[("B", 10)]));
    assert_eq!(graph.vertices(), set_of(&["A", "B"]));

    assert!(graph.remove(&s("A")));
    assert_eq!(graph.vertices(), set_of(&["B"]));
    assert!(graph.sources(&s("B")).is_empty());
    assert!(graph.check_invariants().is_ok());
}

pub(super) fn render_format(graph: &mut dyn Graph<String>) {
    graph.add(s("A"));
    graph.add(s("B"));
    graph.set(s("A"), s("B"), 10).unwrap();
    assert_eq!(graph.render(), "Vertices: [A, B]\nEdges:\nA -> B : 10\n");

    graph.remove(&s("A"));
    assert_eq!(graph.render(), "Vertices: [B]\nEdges:\n");
}

macro_rules! conformance_suite {
    ($name:ident, $ctor:expr) => {
        mod $name {
            use super::*;

            fn run(case: fn(&mut dyn Graph<String>)) {
                let mut graph = $ctor;
                case(&mut graph);
                assert!(graph.check_invariants().is_ok());
            }

            #[test]
            fn test_initial_vertices_empty() {
                run(initial_vertices_empty);
            }

            #[test]
            fn test_add_vertex() {
                run(add_vertex);
            }

            #[test]
            fn test_add_duplicate_vertex() {
                run(add_duplicate_vertex);
            }

            #[test]
            fn test_set_edge() {
                run(set_edge);
            }

            #[test]
            fn test_update_edge_returns_previous() {
                run(update_edge_returns_previous);
            }

            #[test]
            fn test_zero_weight_removes_edge() {
                run(zero_weight_removes_edge);
            }

            #[test]
            fn test_zero_weight_on_missing_edge_adds_vertices() {
                run(zero_weight_on_missing_edge_adds_vertices);
            }

            #[test]
            fn test_negative_weight_rejected() {
                run(negative_weight_rejected);
            }

            #[test]
            fn test_set_creates_missing_endpoints() {
                run(set_creates_missing_endpoints);
            }

            #[test]
            fn test_self_loop() {
                run(self_loop);
            }

            #[test]
            fn test_remove_vertex() {
                run(remove_vertex);
            }

            #[test]
            fn test_remove_cascades_incident_edges() {
                run(remove_cascades_incident_edges);
            }

            #[test]
            fn test_remove_absent_is_noop() {
                run(remove_absent_is_noop);
            }

            #[test]
            fn test_sources_and_targets() {
                run(sources_and_targets);
            }

            #[test]
            fn test_queries_on_absent_vertex_are_empty() {
                run(queries_on_absent_vertex_are_empty);
            }

            #[test]
            fn test_snapshots_are_independent() {
                run(snapshots_are_independent);
            }

            #[test]
            fn test_end_to_end() {
                run(end_to_end);
            }

            #[test]
            fn test_render_format() {
                run(render_format);
            }
        }
    };
}

conformance_suite!(edge_list, EdgeListGraph::<String>::new());
conformance_suite!(adjacency_map, AdjacencyMapGraph::<String>::new());

#[test]
fn test_graph_kind_build() {
    for kind in GraphKind::ALL {
        let mut graph = kind.build::<String>();
        assert_eq!(graph.kind(), kind);
        end_to_end(graph.as_mut());
    }
}

/// 只实现必需方法的图，用于检验默认方法
struct Minimal(EdgeListGraph<String>);

impl Graph<String> for Minimal {
    fn add(&mut self, vertex: String) -> bool {
        self.0.add(vertex)
    }

    fn set(&mut self, source: String, target: String, weight: Weight) -> crate::Result<Weight> {
        self.0.set(source, target, weight)
    }

    fn remove(&mut self, vertex: &String) -> bool {
        self.0.remove(vertex)
    }

    fn vertices(&self) -> HashSet<String> {
        self.0.vertices()
    }

    fn sources(&self, target: &String) -> HashMap<String, Weight> {
        self.0.sources(target)
    }

    fn targets(&self, source: &String) -> HashMap<String, Weight> {
        self.0.targets(source)
    }

    fn vertex_list(&self) -> Vec<String> {
        self.0.vertex_list()
    }

    fn edges(&self) -> Vec<super::Edge<String>> {
        self.0.edges()
    }

    fn check_invariants(&self) -> crate::Result<()> {
        self.0.check_invariants()
    }

    fn kind(&self) -> GraphKind {
        self.0.kind()
    }
}

conformance_suite!(default_methods, Minimal(EdgeListGraph::new()));

#[test]
fn test_default_methods() {
    let mut graph = Minimal(EdgeListGraph::new());
    graph.set(s("A"), s("B"), 4).unwrap();
    graph.add(s("C"));

    assert!(graph.contains(&s("C")));
    assert!(!graph.contains(&s("Z")));
    assert_eq!(graph.weight(&s("A"), &s("B")), 4);
    assert_eq!(graph.weight(&s("B"), &s("A")), 0);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.render(), "Vertices: [A, B, C]\nEdges:\nA -> B : 4\n");
}

/// 随机操作序列同时作用于两种表示，每一步后比较查询结果
#[test]
fn test_representation_equivalence() {
    const LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    for seed in 0..16u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graphs: Vec<Box<dyn Graph<String>>> =
            GraphKind::ALL.iter().map(|k| k.build()).collect();

        for _ in 0..200 {
            let u = s(LABELS[rng.gen_range(0..LABELS.len())]);
            let v = s(LABELS[rng.gen_range(0..LABELS.len())]);
            let op = rng.gen_range(0..10);
            let weight: Weight = rng.gen_range(-2..6);

            let results: Vec<String> = graphs
                .iter_mut()
                .map(|g| match op {
                    0 | 1 => format!("{}", g.add(u.clone())),
                    2 => format!("{}", g.remove(&u)),
                    _ => format!("{:?}", g.set(u.clone(), v.clone(), weight)),
                })
                .collect();
            assert_eq!(results[0], results[1], "seed {} op {}", seed, op);

            let (first, second) = (&graphs[0], &graphs[1]);
            assert_eq!(first.vertices(), second.vertices());
            assert_eq!(first.edge_count(), second.edge_count());
            for x in LABELS.iter().map(|l| s(l)) {
                assert_eq!(first.sources(&x), second.sources(&x));
                assert_eq!(first.targets(&x), second.targets(&x));
            }
            for g in &graphs {
                assert!(g.check_invariants().is_ok());
            }
        }
    }
}
