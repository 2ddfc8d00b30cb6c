//! 局面文本格式解析和生成
//!
//! 井字棋局面格式：
//! `<棋盘> <走子方>`
//!
//! 棋盘为三行，自上而下以 `/` 分隔，`.` 表示空格子。
//! 示例：
//! `XO./.X./..O O`

use crate::board::{Board, GameState};
use crate::constants::BOARD_SIZE;
use crate::error::GameError;
use crate::mark::{Mark, Square};

/// 空棋盘局面，X 先行
pub const EMPTY_NOTATION: &str = ".../.../... X";

/// 局面文本处理
pub struct Notation;

impl Notation {
    /// 解析局面文本为对局状态
    pub fn parse(notation: &str) -> Result<GameState, GameError> {
        let parts: Vec<&str> = notation.split_whitespace().collect();
        if parts.is_empty() {
            return Err(GameError::InvalidNotation {
                reason: "Empty notation string".to_string(),
            });
        }

        // 解析棋盘
        let board = Self::parse_board(parts[0])?;

        // 解析走子方（默认 X）
        let current_turn = if parts.len() > 1 {
            Mark::from_char(parts[1].chars().next().unwrap_or('X')).unwrap_or(Mark::X)
        } else {
            Mark::X
        };

        let move_count = (board.count(Mark::X) + board.count(Mark::O)) as u32;

        Ok(GameState {
            board,
            current_turn,
            move_count,
        })
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, GameError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (row, row_str) in rows.iter().enumerate() {
            if row_str.chars().count() != BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!("Row {} must have exactly {} cells", row, BOARD_SIZE),
                });
            }

            for (col, c) in row_str.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let mark = Mark::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                    reason: format!("Invalid cell char '{}' in row {}", c, row),
                })?;
                // row/col 已在范围内
                let square = Square::new_unchecked(row * BOARD_SIZE + col);
                board.set(square, Some(mark));
            }
        }

        Ok(board)
    }

    /// 生成对局状态的局面文本
    pub fn render(state: &GameState) -> String {
        let mut result = String::with_capacity(16);

        for row in 0..BOARD_SIZE {
            if row > 0 {
                result.push('/');
            }
            for col in 0..BOARD_SIZE {
                let square = Square::new_unchecked(row * BOARD_SIZE + col);
                match state.board.get(square) {
                    Some(mark) => result.push(mark.to_char()),
                    None => result.push('.'),
                }
            }
        }

        result.push(' ');
        result.push(state.current_turn.to_char());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    #[test]
    fn test_parse_empty() {
        let state = Notation::parse(EMPTY_NOTATION).unwrap();
        assert_eq!(state.board, Board::empty());
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.move_count, 0);
    }

    #[test]
    fn test_parse_mid_game() {
        let state = Notation::parse("XO./.X./..O O").unwrap();
        assert_eq!(state.board.get(Square::new_unchecked(0)), Some(Mark::X));
        assert_eq!(state.board.get(Square::new_unchecked(1)), Some(Mark::O));
        assert_eq!(state.board.get(Square::new_unchecked(4)), Some(Mark::X));
        assert_eq!(state.board.get(Square::new_unchecked(8)), Some(Mark::O));
        assert_eq!(state.current_turn, Mark::O);
        assert_eq!(state.move_count, 4);
    }

    #[test]
    fn test_parse_win_position() {
        let state = Notation::parse("XXX/OO./... O").unwrap();
        assert_eq!(state.board.outcome(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_parse_default_turn() {
        // 缺少走子方时默认 X
        let state = Notation::parse("O../.../...").unwrap();
        assert_eq!(state.current_turn, Mark::X);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Notation::parse("").is_err());
        // 行数不对
        assert!(Notation::parse("XXX/OOO X").is_err());
        // 行内格子数不对
        assert!(Notation::parse("XX/.../.. X").is_err());
        // 非法字符
        assert!(Notation::parse("XZ./.../... X").is_err());
    }

    #[test]
    fn test_render_round_trip() {
        let notation = "X.O/.O./X.. O";
        let state = Notation::parse(notation).unwrap();
        assert_eq!(Notation::render(&state), notation);
    }
}
