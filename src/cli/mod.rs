//! 交互式命令行
//!
//! 命令解析、执行、结果打印与补全

mod commands;
mod completer;
mod printer;

pub use commands::{execute_line, Command, CommandResult, COMMAND_NAMES};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
