//! 终局评估函数

use tictactoe_core::{Mark, Outcome};

/// 获胜基础分
pub const WIN_SCORE: i32 = 10;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估终结局面（AI 视角）
    ///
    /// 分数按到达终局的深度修正：更快的获胜、更慢的失败得分更高。
    /// 局面未终结时返回 None，由搜索继续展开
    pub fn terminal_score(outcome: Outcome, ai_mark: Mark, depth: u8) -> Option<i32> {
        match outcome {
            Outcome::Win(mark) if mark == ai_mark => Some(WIN_SCORE - depth as i32),
            Outcome::Win(_) => Some(-WIN_SCORE + depth as i32),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }
}
