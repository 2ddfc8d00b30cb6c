//! 规则常量定义

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = 9;

/// 搜索最大深度（每个格子最多落一子）
pub const MAX_DEPTH: u8 = 9;

/// 全部获胜线（3 行、3 列、2 条对角线），按格子索引给出
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
