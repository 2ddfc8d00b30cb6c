//! 井字棋共享规则库
//!
//! 包含:
//! - 标记、格子、棋盘等核心数据结构
//! - 落子合法性检查与胜负判定
//! - 走法生成 (MoveGenerator)
//! - 局面文本格式 (Notation)

mod board;
mod constants;
mod error;
mod mark;
mod moves;
mod notation;
mod outcome;

pub use board::{Board, GameState};
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::{Mark, Square};
pub use moves::MoveGenerator;
pub use notation::{Notation, EMPTY_NOTATION};
pub use outcome::Outcome;
