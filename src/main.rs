mod config;
mod error;
mod grading;
mod models;
mod session;
mod storage;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Cli;
use crate::error::Result;
use crate::session::Session;
use crate::storage::resolve_catalog;
use crate::ui::{App, render};

/// 日志写入数据目录下的 quiz.log（终端由 TUI 占用）
fn init_logging(data_dir: &Path, level: &str) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("quiz.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::resolve(&cli)?;

    init_logging(&config::data_dir()?, &config.log_level)?;
    info!(
        "universe-quiz v{} starting (seed: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.seed
    );

    // 加载题库
    let catalog = resolve_catalog(config.deck.as_deref())?;

    // 创建应用状态
    let mut app = App::new(Session::with_seed(catalog, config.seed));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let snapshot = app.session.snapshot();
    info!(
        longest_streak = snapshot.longest_streak,
        mastered = snapshot.mastered.len(),
        "session finished"
    );
    println!(
        "Longest streak: {}  |  Mastered cards: {}",
        snapshot.longest_streak,
        snapshot.mastered.len()
    );

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}
