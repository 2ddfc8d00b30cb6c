//! 本地对战会话

use anyhow::Result;
use tictactoe_ai::AiEngine;
use tictactoe_core::{Board, GameState, Mark, Outcome, Square, BOARD_SIZE};

use crate::input;

/// 对战设置
#[derive(Debug, Clone, Copy)]
pub struct Setup {
    /// 人类标记
    pub human_mark: Mark,
    /// 先手方
    pub first_mark: Mark,
}

/// 本地人机对战会话
pub struct Session {
    state: GameState,
    human_mark: Mark,
    ai_mark: Mark,
    engine: AiEngine,
}

impl Session {
    /// 创建新会话
    pub fn new(setup: Setup) -> Self {
        Self {
            state: GameState::initial(setup.first_mark),
            human_mark: setup.human_mark,
            ai_mark: setup.human_mark.opponent(),
            engine: AiEngine::new(),
        }
    }

    /// 运行对战循环直至终局
    pub fn run(&mut self) -> Result<()> {
        println!("欢迎来到井字棋!");
        render(&self.state.board);

        loop {
            let outcome = self.state.board.outcome();
            if outcome.is_terminal() {
                self.announce(outcome);
                return Ok(());
            }

            if self.state.current_turn == self.human_mark {
                let square = input::read_human_move(&self.state.board)?;
                self.state.play(square)?;
            } else {
                tracing::info!("AI 开始思考...");
                let square =
                    self.engine
                        .best_move(&mut self.state.board, self.ai_mark, self.ai_mark)?;
                self.state.play(square)?;
                println!("AI 落子: {}", square.index() + 1);
            }

            render(&self.state.board);
        }
    }

    /// 打印对局结果
    fn announce(&self, outcome: Outcome) {
        match outcome.winner() {
            Some(mark) if mark == self.human_mark => println!("恭喜，你赢了!"),
            Some(_) => println!("AI 获胜，再接再厉!"),
            None => println!("平局!"),
        }
    }
}

/// 打印棋盘，带 1-3 行列坐标
fn render(board: &Board) {
    println!("\n  1 2 3");
    for row in 0..BOARD_SIZE {
        print!("{}", row + 1);
        for col in 0..BOARD_SIZE {
            let square = Square::new_unchecked(row * BOARD_SIZE + col);
            match board.get(square) {
                Some(mark) => print!(" {}", mark),
                None => print!(" ."),
            }
        }
        println!();
    }
}
