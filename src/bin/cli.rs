//! Digraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use digraph::cli::{execute_line, CommandCompleter, CommandResult, PrintMode, Printer};
use digraph::{Graph, GraphKind};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "digraph-cli")]
#[command(about = "Digraph 有向带权图命令行工具")]
#[command(version = digraph::VERSION)]
struct Args {
    /// 存储表示: edge-list, adjacency-map
    #[arg(short, long, default_value = "adjacency-map")]
    kind: GraphKind,

    /// 执行命令后退出（多条命令以 ; 分隔）
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// 垂直显示查询结果
    #[arg(long)]
    vertical: bool,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mode = if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    };
    let mut printer = Printer::new(mode);
    let mut graph = args.kind.build::<String>();
    info!(kind = %args.kind, "图已创建");

    // 单次执行模式
    if let Some(line) = args.execute {
        let results = execute_line(graph.as_mut(), &line, &mut printer)
            .with_context(|| format!("执行失败: {}", line))?;
        print_results(&results);
        return Ok(());
    }

    println!("Digraph CLI - 有向带权图");
    println!("========================");
    println!("存储表示: {}", args.kind);
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        match rl.readline("digraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if handle_line(graph.as_mut(), line, &mut printer) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("再见！");
    Ok(())
}

/// 返回 true 表示退出
fn handle_line(graph: &mut dyn Graph<String>, line: &str, printer: &mut Printer) -> bool {
    match execute_line(graph, line, printer) {
        Ok(results) => {
            print_results(&results);
            results.contains(&CommandResult::Exit)
        }
        Err(e) => {
            eprintln!("{} {}", "错误:".red().bold(), e);
            false
        }
    }
}

fn print_results(results: &[CommandResult]) {
    for result in results {
        if let CommandResult::Message(msg) = result {
            if msg.ends_with('\n') {
                print!("{}", msg);
            } else {
                println!("{}", msg);
            }
        }
    }
}
