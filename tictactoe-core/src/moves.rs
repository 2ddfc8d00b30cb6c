//! 走法生成

use crate::board::Board;
use crate::constants::CELL_COUNT;
use crate::mark::Square;

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成所有合法走法（空格子），按索引升序
    ///
    /// 升序是搜索引擎同分走法决胜的依据，顺序不可改变
    pub fn legal_moves(board: &Board) -> Vec<Square> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for index in 0..CELL_COUNT {
            let square = Square::new_unchecked(index);
            if board.get(square).is_none() {
                moves.push(square);
            }
        }
        moves
    }
}
