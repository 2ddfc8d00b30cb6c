//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，始终搜索到终局

use tictactoe_core::{Board, GameError, Mark, MoveGenerator, Result, Square, MAX_DEPTH};

use crate::evaluate::Evaluator;

/// AI 引擎
///
/// 调用之间无状态，`nodes_searched` 仅统计最近一次搜索
pub struct AiEngine {
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new() -> Self {
        Self { nodes_searched: 0 }
    }

    /// 搜索最佳落子
    ///
    /// `ai_mark` 是引擎代表的一方，`to_move` 是当前走子方；
    /// `to_move == ai_mark` 时最大化，否则最小化。
    /// 前置条件：局面未终结且至少有一个空格子，否则返回 NoLegalMove。
    ///
    /// 同分走法按索引升序决胜：遍历升序且比较使用严格不等号，
    /// 因此结果确定，最低索引的最优走法胜出
    pub fn best_move(&mut self, board: &mut Board, ai_mark: Mark, to_move: Mark) -> Result<Square> {
        self.nodes_searched = 0;

        if board.outcome().is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        let moves = MoveGenerator::legal_moves(board);
        if moves.is_empty() {
            return Err(GameError::NoLegalMove);
        }

        let maximizing = to_move == ai_mark;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best_square = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for square in moves {
            board.set(square, Some(to_move));
            let score = self.minimax(board, ai_mark, to_move.opponent(), 1, alpha, beta);
            board.undo(square);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_square = Some(square);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_square = Some(square);
                }
                beta = beta.min(best_score);
            }
        }

        // moves 非空，第一个走法必然更新 best_square
        let square = best_square.ok_or(GameError::NoLegalMove)?;
        tracing::debug!(
            square = square.index(),
            score = best_score,
            nodes = self.nodes_searched,
            "search finished"
        );
        Ok(square)
    }

    /// Alpha-Beta 搜索
    ///
    /// 每次落子在递归返回后立即撤销，再做剪枝判断，
    /// 保证任何退出路径上棋盘都恢复原状
    fn minimax(
        &mut self,
        board: &mut Board,
        ai_mark: Mark,
        to_move: Mark,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        debug_assert!(depth <= MAX_DEPTH);
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal_score(board.outcome(), ai_mark, depth) {
            return score;
        }

        let moves = MoveGenerator::legal_moves(board);

        if to_move == ai_mark {
            let mut best = i32::MIN;
            for square in moves {
                board.set(square, Some(to_move));
                let score =
                    self.minimax(board, ai_mark, to_move.opponent(), depth + 1, alpha, beta);
                board.undo(square);

                if score > best {
                    best = score;
                }
                alpha = alpha.max(best);
                if alpha >= beta {
                    break; // Beta 剪枝
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for square in moves {
                board.set(square, Some(to_move));
                let score =
                    self.minimax(board, ai_mark, to_move.opponent(), depth + 1, alpha, beta);
                board.undo(square);

                if score < best {
                    best = score;
                }
                beta = beta.min(best);
                if alpha >= beta {
                    break; // Alpha 剪枝
                }
            }
            best
        }
    }

    /// 获取最近一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
