//! 错误类型定义

use crate::types::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效的边权重: {0}（权重不能为负）")]
    InvalidWeight(Weight),

    #[error("表示不变式被破坏: {0}")]
    InvariantViolation(String),

    #[error("未知的图表示: {0}（可选 edge-list, adjacency-map）")]
    UnknownGraphKind(String),

    #[error("命令错误: {0}")]
    Command(String),
}
