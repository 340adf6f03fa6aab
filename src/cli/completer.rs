//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::commands::COMMAND_NAMES;

/// Digraph CLI 补全器
///
/// 仅补全每条命令（以 `;` 分隔）的第一个单词。
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 返回 (替换起点, 候选列表)
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let line_to_cursor = &line[..pos];
        // 当前命令从最后一个 ; 之后开始
        let cmd_start = line_to_cursor.rfind(';').map_or(0, |i| i + 1);
        let current = &line_to_cursor[cmd_start..];
        let word = current.trim_start();

        // 已经在输入参数
        if word.contains(char::is_whitespace) {
            return (pos, vec![]);
        }

        let start = pos - word.len();
        let lower = word.to_lowercase();
        let completions = COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(&lower))
            .map(|name| name.to_string())
            .collect();
        (start, completions)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = self.candidates(line, pos);
        let completions = names
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
