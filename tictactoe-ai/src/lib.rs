//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估函数
//! - Minimax + Alpha-Beta 搜索

mod evaluate;
mod search;

pub use evaluate::{Evaluator, WIN_SCORE};
pub use search::AiEngine;
