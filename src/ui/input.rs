//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, show_help: bool, key: KeyCode) -> Option<Action> {
    if show_help {
        return match key {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Action::NextCard),
            KeyCode::Char('h') | KeyCode::Char('b') | KeyCode::Left => Some(Action::PreviousCard),
            KeyCode::Char('r') => Some(Action::RandomCard),
            KeyCode::Char('s') => Some(Action::Shuffle),
            KeyCode::Char('m') => Some(Action::Master),
            KeyCode::Char('c') => Some(Action::Check),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('a') => Some(Action::StartAnswer),
            _ => None,
        },
        AppMode::Answering => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.mode, app.show_help, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_mode_bindings() {
        let get = |key| get_action(AppMode::Normal, false, key);
        assert_eq!(get(KeyCode::Right), Some(Action::NextCard));
        assert_eq!(get(KeyCode::Char('b')), Some(Action::PreviousCard));
        assert_eq!(get(KeyCode::Char('r')), Some(Action::RandomCard));
        assert_eq!(get(KeyCode::Char('s')), Some(Action::Shuffle));
        assert_eq!(get(KeyCode::Char('m')), Some(Action::Master));
        assert_eq!(get(KeyCode::Enter), Some(Action::StartAnswer));
        assert_eq!(get(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get(KeyCode::Char('z')), None);
    }

    #[test]
    fn answering_mode_captures_letters() {
        let get = |key| get_action(AppMode::Answering, false, key);
        assert_eq!(get(KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get(KeyCode::Char('m')), Some(Action::Input('m')));
        assert_eq!(get(KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get(KeyCode::Backspace), Some(Action::DeleteChar));
        assert_eq!(get(KeyCode::Esc), Some(Action::Cancel));
    }

    #[test]
    fn help_overlay_swallows_other_keys() {
        assert_eq!(
            get_action(AppMode::Normal, true, KeyCode::Esc),
            Some(Action::ToggleHelp)
        );
        assert_eq!(get_action(AppMode::Normal, true, KeyCode::Char('n')), None);
    }
}
