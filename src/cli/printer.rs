//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use std::collections::HashMap;
use std::fmt::Write;

use prettytable::{format, row, Cell, Row, Table};

use crate::graph::Edge;
use crate::types::{GraphKind, Weight};

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式（控制台 `mode` 命令）
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 当前打印模式
    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印行集合
    pub fn print_result(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!(
            "{}\n{} row(s) in set\n",
            output.trim_end_matches('\n'),
            rows.len()
        )
    }

    /// 顶点列表
    pub fn format_vertices(&self, vertices: &[String]) -> String {
        let rows: Vec<Vec<String>> = vertices.iter().map(|v| vec![v.clone()]).collect();
        self.print_result(&["Vertex"], &rows)
    }

    /// 邻居 -> 权重，按顶点名排序
    pub fn format_weights(&self, column: &str, weights: &HashMap<String, Weight>) -> String {
        let mut entries: Vec<(&String, &Weight)> = weights.iter().collect();
        entries.sort();
        let rows: Vec<Vec<String>> = entries
            .into_iter()
            .map(|(v, w)| vec![v.clone(), w.to_string()])
            .collect();
        self.print_result(&[column, "Weight"], &rows)
    }

    /// 边列表
    pub fn format_edges(&self, edges: &[Edge<String>]) -> String {
        let rows: Vec<Vec<String>> = edges
            .iter()
            .map(|e| {
                vec![
                    e.source().clone(),
                    e.target().clone(),
                    e.weight().to_string(),
                ]
            })
            .collect();
        self.print_result(&["Source", "Target", "Weight"], &rows)
    }

    /// 表格格式：首行为列名，使用方框字符绘制边框
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::init(
            rows.iter()
                .map(|r| Row::new(r.iter().map(|v| Cell::new(v)).collect()))
                .collect(),
        );
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(columns.iter().map(|c| Cell::new(c)).collect()));
        table.to_string()
    }

    /// 垂直格式：每行一个块，列名右对齐
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let width = columns.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let rule = "*".repeat(27);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            // 写入 String 不会失败
            let _ = writeln!(output, "{rule} {}. row {rule}", i + 1);
            for (col, value) in columns
                .iter()
                .zip(row_data.iter().map(String::as_str).chain(std::iter::repeat("")))
            {
                let _ = writeln!(output, "{col:>width$}: {value}");
            }
        }

        output
    }

    /// 统计信息
    pub fn format_stats(&self, kind: GraphKind, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Representation", kind.as_str()]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 帮助信息
    pub fn help_text() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   Digraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

  add, a <顶点>                 添加顶点
  set, s <源> <目标> <权重>     设置边权重（权重 0 删除边）
                                示例: set A B 10
  remove, rm <顶点>             删除顶点及其所有关联边
  vertices, v                   列出所有顶点
  sources, in <顶点>            列出指向该顶点的边
  targets, out <顶点>           列出从该顶点出发的边
  weight, w <源> <目标>         查看边权重（不存在为 0）
  edges, e                      列出所有边
  show                          文本形式显示整个图
  stats, info                   显示统计信息
  mode <table|vertical>         切换结果打印模式
  check                         校验内部不变式
  help, h, ?                    显示帮助
  quit, exit, q                 退出程序

多条命令可用 ; 分隔: add A; add B; set A B 10

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
