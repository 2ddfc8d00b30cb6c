//! 错误类型定义

use thiserror::Error;

use crate::mark::Square;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 无效的格子索引
    #[error("Invalid square index: {index} (must be 0-8)")]
    InvalidSquare { index: usize },

    /// 目标格子已被占用
    #[error("Square {square} is already occupied")]
    IllegalMove { square: Square },

    /// 局面已终结，没有可落子的格子
    #[error("No legal move: the position is terminal")]
    NoLegalMove,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的局面文本
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
