//! 井字棋控制台客户端
//!
//! 人机对战：人类通过 1-9 输入落子，AI 由搜索引擎驱动

mod input;
mod session;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tictactoe_cli=info".parse()?)
                .add_directive("tictactoe_ai=info".parse()?),
        )
        .init();

    let setup = input::read_setup()?;
    session::Session::new(setup).run()
}
