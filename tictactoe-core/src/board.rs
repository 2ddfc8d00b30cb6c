//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, WINNING_LINES};
use crate::error::{GameError, Result};
use crate::mark::{Mark, Square};
use crate::outcome::Outcome;

/// 3x3 棋盘，行优先存储
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 9 个格子，None 表示空
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 获取指定格子的标记
    pub fn get(&self, square: Square) -> Option<Mark> {
        self.cells[square.index()]
    }

    /// 设置指定格子（不检查规则，供搜索做落子/撤销用）
    pub fn set(&mut self, square: Square, cell: Option<Mark>) {
        self.cells[square.index()] = cell;
    }

    /// 落子。前置条件：格子为空，否则返回 IllegalMove
    pub fn apply(&mut self, square: Square, mark: Mark) -> Result<()> {
        if self.get(square).is_some() {
            return Err(GameError::IllegalMove { square });
        }
        self.set(square, Some(mark));
        Ok(())
    }

    /// 撤销落子，将格子恢复为空。与 apply 成对使用
    pub fn undo(&mut self, square: Square) {
        self.set(square, None);
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// 统计指定标记的落子数
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// 判定当前对局结果
    ///
    /// 依次检查 8 条获胜线，再检查是否满盘和棋
    pub fn outcome(&self) -> Outcome {
        for line in WINNING_LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Outcome::Win(mark);
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// 完整的对局状态（棋盘 + 走子方 + 步数）
///
/// 由外层游戏循环持有；搜索引擎只接受 `&mut Board`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Mark,
    /// 已落子数
    pub move_count: u32,
}

impl GameState {
    /// 创建初始状态，指定先手方
    pub fn initial(first_mark: Mark) -> Self {
        Self {
            board: Board::empty(),
            current_turn: first_mark,
            move_count: 0,
        }
    }

    /// 当前走子方落子，并在对局未结束时交换走子方
    ///
    /// 返回落子后的对局结果
    pub fn play(&mut self, square: Square) -> Result<Outcome> {
        if self.board.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }

        self.board.apply(square, self.current_turn)?;
        self.move_count += 1;

        let outcome = self.board.outcome();
        if !outcome.is_terminal() {
            self.switch_turn();
        }
        Ok(outcome)
    }

    /// 交换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(Mark::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(!board.is_full());
        assert_eq!(board.outcome(), Outcome::InProgress);
        for index in 0..CELL_COUNT {
            assert_eq!(board.get(Square::new_unchecked(index)), None);
        }
    }

    #[test]
    fn test_apply_and_undo() {
        let mut board = Board::empty();
        let before = board.clone();
        let square = Square::new_unchecked(4);

        board.apply(square, Mark::X).unwrap();
        assert_eq!(board.get(square), Some(Mark::X));

        board.undo(square);
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_occupied() {
        let mut board = Board::empty();
        let square = Square::new_unchecked(0);

        board.apply(square, Mark::X).unwrap();
        let err = board.apply(square, Mark::O).unwrap_err();
        assert_eq!(err, GameError::IllegalMove { square });
    }

    #[test]
    fn test_apply_undo_every_square() {
        // 所有格子、所有标记的 apply/undo 往返都应还原棋盘
        for index in 0..CELL_COUNT {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::empty();
                let before = board.clone();
                let square = Square::new_unchecked(index);

                board.apply(square, mark).unwrap();
                board.undo(square);
                assert_eq!(board, before);
            }
        }
    }

    #[test]
    fn test_outcome_all_lines() {
        // 每条获胜线都应被识别
        for line in WINNING_LINES {
            let mut board = Board::empty();
            for index in line {
                board.set(Square::new_unchecked(index), Some(Mark::O));
            }
            assert_eq!(board.outcome(), Outcome::Win(Mark::O));
        }
    }

    #[test]
    fn test_outcome_draw() {
        // X O X / X O O / O X X，满盘无胜者
        let cells = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        let mut board = Board::empty();
        for (index, mark) in cells.into_iter().enumerate() {
            board.set(Square::new_unchecked(index), Some(mark));
        }
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_game_state_play() {
        let mut state = GameState::initial(Mark::X);

        let outcome = state.play(Square::new_unchecked(0)).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(state.current_turn, Mark::O);
        assert_eq!(state.move_count, 1);

        // 已占用的格子应被拒绝
        let err = state.play(Square::new_unchecked(0)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                square: Square::new_unchecked(0)
            }
        );
    }

    #[test]
    fn test_game_state_win_stops_play() {
        let mut state = GameState::initial(Mark::X);

        // X: 0, O: 3, X: 1, O: 4, X: 2 -> X 获胜
        state.play(Square::new_unchecked(0)).unwrap();
        state.play(Square::new_unchecked(3)).unwrap();
        state.play(Square::new_unchecked(1)).unwrap();
        state.play(Square::new_unchecked(4)).unwrap();
        let outcome = state.play(Square::new_unchecked(2)).unwrap();

        assert_eq!(outcome, Outcome::Win(Mark::X));
        // 终局后继续落子应被拒绝
        let err = state.play(Square::new_unchecked(5)).unwrap_err();
        assert_eq!(err, GameError::GameOver);
    }

    #[test]
    fn test_board_serde_round_trip() {
        let mut board = Board::empty();
        board.set(Square::new_unchecked(4), Some(Mark::X));
        board.set(Square::new_unchecked(8), Some(Mark::O));

        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
