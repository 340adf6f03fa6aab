//! 控制台命令处理
//!
//! 解析并执行形如 `set A B 10` 的单行命令

use std::str::FromStr;

use tracing::debug;

use super::printer::{PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// add <v>
    Add(String),
    /// set <u> <v> <w>
    Set {
        source: String,
        target: String,
        weight: Weight,
    },
    /// remove <v>
    Remove(String),
    /// vertices
    Vertices,
    /// sources <v>
    Sources(String),
    /// targets <v>
    Targets(String),
    /// weight <u> <v>
    Weight { source: String, target: String },
    /// edges
    Edges,
    /// show
    Show,
    /// stats
    Stats,
    /// mode <table|vertical>
    Mode(PrintMode),
    /// check
    Check,
    /// help
    Help,
    /// quit
    Quit,
}

/// 命令名列表（用于补全）
pub const COMMAND_NAMES: &[&str] = &[
    "add", "set", "remove", "vertices", "sources", "targets", "weight", "edges", "show",
    "stats", "mode", "check", "help", "quit",
];

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
}

fn arity(cmd: &str, args: &[&str], expected: usize, usage: &str) -> Result<()> {
    if args.len() != expected {
        return Err(Error::Command(format!("{} 需要 {} 个参数，用法: {}", cmd, expected, usage)));
    }
    Ok(())
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let cmd = parts
            .next()
            .ok_or_else(|| Error::Command("空命令".to_string()))?
            .to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match cmd.as_str() {
            "add" | "a" => {
                arity(&cmd, &args, 1, "add <顶点>")?;
                Command::Add(args[0].to_string())
            }
            "set" | "s" => {
                arity(&cmd, &args, 3, "set <源> <目标> <权重>")?;
                let weight = args[2]
                    .parse::<Weight>()
                    .map_err(|e| Error::Command(format!("无效的权重 '{}': {}", args[2], e)))?;
                Command::Set {
                    source: args[0].to_string(),
                    target: args[1].to_string(),
                    weight,
                }
            }
            "remove" | "rm" => {
                arity(&cmd, &args, 1, "remove <顶点>")?;
                Command::Remove(args[0].to_string())
            }
            "vertices" | "v" => {
                arity(&cmd, &args, 0, "vertices")?;
                Command::Vertices
            }
            "sources" | "in" => {
                arity(&cmd, &args, 1, "sources <顶点>")?;
                Command::Sources(args[0].to_string())
            }
            "targets" | "out" => {
                arity(&cmd, &args, 1, "targets <顶点>")?;
                Command::Targets(args[0].to_string())
            }
            "weight" | "w" => {
                arity(&cmd, &args, 2, "weight <源> <目标>")?;
                Command::Weight {
                    source: args[0].to_string(),
                    target: args[1].to_string(),
                }
            }
            "edges" | "e" => {
                arity(&cmd, &args, 0, "edges")?;
                Command::Edges
            }
            "show" => Command::Show,
            "stats" | "info" => Command::Stats,
            "mode" => {
                arity(&cmd, &args, 1, "mode <table|vertical>")?;
                match args[0].to_lowercase().as_str() {
                    "table" | "t" => Command::Mode(PrintMode::Table),
                    "vertical" | "v" => Command::Mode(PrintMode::Vertical),
                    other => {
                        return Err(Error::Command(format!(
                            "未知的打印模式: {}（可选 table, vertical）",
                            other
                        )))
                    }
                }
            }
            "check" => Command::Check,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(Error::Command(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    other
                )))
            }
        };
        Ok(command)
    }
}

impl Command {
    /// 在图上执行命令
    pub fn execute(
        &self,
        graph: &mut dyn Graph<String>,
        printer: &mut Printer,
    ) -> Result<CommandResult> {
        debug!(command = ?self, "执行命令");

        let message = match self {
            Command::Add(v) => {
                if graph.add(v.clone()) {
                    format!("已添加顶点 {}", v)
                } else {
                    format!("顶点 {} 已存在", v)
                }
            }
            Command::Set {
                source,
                target,
                weight,
            } => {
                let previous = graph.set(source.clone(), target.clone(), *weight)?;
                format!("{} -> {} : {}（原权重 {}）", source, target, weight, previous)
            }
            Command::Remove(v) => {
                if graph.remove(v) {
                    format!("已删除顶点 {}", v)
                } else {
                    format!("顶点 {} 不存在", v)
                }
            }
            Command::Vertices => printer.format_vertices(&graph.vertex_list()),
            Command::Sources(v) => printer.format_weights("Source", &graph.sources(v)),
            Command::Targets(v) => printer.format_weights("Target", &graph.targets(v)),
            Command::Weight { source, target } => graph.weight(source, target).to_string(),
            Command::Edges => printer.format_edges(&graph.edges()),
            Command::Show => graph.render(),
            Command::Stats => {
                printer.format_stats(graph.kind(), graph.vertex_count(), graph.edge_count())
            }
            Command::Mode(mode) => {
                printer.set_mode(*mode);
                format!("打印模式: {:?}", mode)
            }
            Command::Check => {
                graph.check_invariants()?;
                "不变式检查通过".to_string()
            }
            Command::Help => Printer::help_text(),
            Command::Quit => return Ok(CommandResult::Exit),
        };

        Ok(CommandResult::Message(message))
    }
}

/// 执行一行输入，多条命令以 `;` 分隔
///
/// 先解析全部命令，任一命令解析失败则整行不执行；执行时遇到错误立即停止。
pub fn execute_line(
    graph: &mut dyn Graph<String>,
    line: &str,
    printer: &mut Printer,
) -> Result<Vec<CommandResult>> {
    let commands = line
        .split(';')
        .map(|part| {
            if part.trim().is_empty() {
                Ok(None)
            } else {
                part.parse::<Command>().map(Some)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let mut results = Vec::with_capacity(commands.len());
    for command in commands {
        let Some(command) = command else {
            results.push(CommandResult::Continue);
            continue;
        };
        let result = command.execute(graph, printer)?;
        let exit = result == CommandResult::Exit;
        results.push(result);
        if exit {
            break;
        }
    }
    Ok(results)
}
