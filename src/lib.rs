//! Digraph - 可变有向带权图
//!
//! 提供统一的图接口与两种可互换的存储表示：
//! - 边列表（[`EdgeListGraph`]）
//! - 邻接映射（[`AdjacencyMapGraph`]）
//!
//! ```
//! use digraph::{AdjacencyMapGraph, Graph};
//!
//! let mut graph = AdjacencyMapGraph::new();
//! graph.set("A".to_string(), "B".to_string(), 10).unwrap();
//! assert_eq!(graph.targets(&"A".to_string()).get("B"), Some(&10));
//! ```

pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{AdjacencyMapGraph, Edge, EdgeListGraph, Graph};
pub use types::{GraphKind, VertexLabel, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
