//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::session::{CORRECT_FEEDBACK, Snapshot};
use components::{difficulty_color, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // 标题
            Constraint::Length(3),  // 连胜
            Constraint::Min(11),    // 卡片
            Constraint::Length(8),  // 已掌握
            Constraint::Length(3),  // 帮助
        ])
        .split(frame.area());

    let snapshot = app.session.snapshot();

    render_title(frame, chunks[0]);
    render_streaks(frame, &snapshot, chunks[1]);
    render_card(frame, app, &snapshot, chunks[2]);
    render_mastered(frame, &snapshot, chunks[3]);
    render_help(frame, app, chunks[4]);

    if app.show_help {
        render_help_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🌌 Universe Facts Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_streaks(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("🔥 Streak: {}", snapshot.current_streak),
            Style::default().fg(Color::LightRed),
        ),
        Span::raw("    "),
        Span::styled(
            format!("🏆 Longest Streak: {}", snapshot.longest_streak),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let streaks = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(streaks, area);
}

fn render_card(frame: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let fact = snapshot.fact;
    let block = Block::default()
        .title(format!("Category: {}", fact.subject))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(difficulty_color(fact.difficulty)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 难度
            Constraint::Min(2),    // 问题
            Constraint::Length(3), // 输入
            Constraint::Length(2), // 反馈
        ])
        .split(inner);

    let info = format!(
        "Difficulty: {}    Card {}/{}",
        fact.difficulty,
        snapshot.position + 1,
        snapshot.deck_len
    );
    frame.render_widget(
        Paragraph::new(info).style(Style::default().fg(difficulty_color(fact.difficulty))),
        chunks[0],
    );

    let question = Paragraph::new(fact.question.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(question, chunks[1]);

    render_input_widget(
        frame,
        chunks[2],
        snapshot.user_answer,
        app.mode == AppMode::Answering,
    );

    // 仅在判定后显示反馈
    if !snapshot.revealed {
        return;
    }
    if let Some(feedback) = snapshot.feedback {
        let color = if feedback == CORRECT_FEEDBACK {
            Color::Green
        } else {
            Color::Red
        };
        let feedback = Paragraph::new(feedback)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });
        frame.render_widget(feedback, chunks[3]);
    }
}

fn render_mastered(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let items: Vec<ListItem> = snapshot
        .mastered
        .iter()
        .map(|fact| ListItem::new(format!("{} – {}", fact.question, fact.answer)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("🎯 Mastered Cards ({})", snapshot.mastered.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Normal => {
            "[Enter] 作答  [c] 判定  [←/→] 上/下一张  [r] 随机  [s] 洗牌  [m] 掌握  [?] 帮助  [q] 退出"
        }
        AppMode::Answering => "输入答案后按 [Enter] 判定  [Esc] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "帮助");

    let lines = [
        "Enter / i / a   开始作答",
        "c               判定当前输入",
        "→ / l / n       下一张",
        "← / h / b       上一张",
        "r               随机一张",
        "s               洗牌（回到第一张）",
        "m               标记为已掌握",
        "q               退出",
        "",
        "答案忽略大小写，包含或被包含即算正确",
        "",
        "[Esc] 或 [?] 关闭",
    ];
    let text: Vec<Line> = lines.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner);
}
