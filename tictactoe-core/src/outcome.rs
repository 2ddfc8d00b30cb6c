//! 对局结果

use serde::{Deserialize, Serialize};

use crate::mark::Mark;

/// 对局结果，由棋盘按需推导，不单独存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 某一方连成三子
    Win(Mark),
    /// 棋盘已满且无人获胜
    Draw,
    /// 对局仍在进行
    InProgress,
}

impl Outcome {
    /// 局面是否已终结（获胜或和棋）
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// 获胜方（如果有）
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal() {
        assert!(Outcome::Win(Mark::X).is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }
}
