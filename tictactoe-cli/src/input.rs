//! 控制台输入

use std::io::{self, Write};

use anyhow::Result;
use tictactoe_core::{Board, Mark, Square};

use crate::session::Setup;

/// 读取一行输入并去除首尾空白
fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 对战前的设置菜单：选择标记和先手方
pub fn read_setup() -> Result<Setup> {
    let human_mark = loop {
        let answer = read_line("选择你的标记 (X/O) [X]: ")?;
        if answer.is_empty() {
            break Mark::X;
        }
        match Mark::from_char(answer.chars().next().unwrap_or(' ')) {
            Some(mark) => break mark,
            None => println!("无效输入，请输入 X 或 O。"),
        }
    };

    let first_mark = loop {
        let answer = read_line("谁先手? (1 = 你, 2 = AI) [1]: ")?;
        match answer.as_str() {
            "" | "1" => break human_mark,
            "2" => break human_mark.opponent(),
            _ => println!("无效输入，请输入 1 或 2。"),
        }
    };

    Ok(Setup {
        human_mark,
        first_mark,
    })
}

/// 读取人类落子（1-9），占用或非法输入时重新提示
pub fn read_human_move(board: &Board) -> Result<Square> {
    loop {
        let answer = read_line("输入落子位置 (1-9): ")?;
        let square = answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
            .and_then(|n| Square::new(n - 1));

        let Some(square) = square else {
            println!("无效输入，请输入 1-9。");
            continue;
        };

        if board.get(square).is_some() {
            println!("该格子已被占用，换一个吧。");
            continue;
        }

        return Ok(square);
    }
}
