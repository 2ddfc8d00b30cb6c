//! 标记与格子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 玩家标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X（惯例上的先手）
    X,
    /// O
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取标记字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Mark> {
        match c.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘格子，以行优先索引 (0-8) 标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    index: u8,
}

impl Square {
    /// 创建新格子
    pub fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self { index: index as u8 })
        } else {
            None
        }
    }

    /// 创建新格子（不检查边界，内部使用）
    pub const fn new_unchecked(index: usize) -> Self {
        Self { index: index as u8 }
    }

    /// 从行列坐标创建
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                index: (row * BOARD_SIZE + col) as u8,
            })
        } else {
            None
        }
    }

    /// 转换为数组索引
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// 行 (0-2)
    pub fn row(&self) -> usize {
        self.index as usize / BOARD_SIZE
    }

    /// 列 (0-2)
    pub fn col(&self) -> usize {
        self.index as usize % BOARD_SIZE
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
