//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑，卡片相关的状态变更都委托给 Session

use tracing::info;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::session::{MasterOutcome, Session, Verdict};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::NextCard => self.navigate(|s| s.next()),
            Action::PreviousCard => self.navigate(|s| s.back()),
            Action::RandomCard => self.navigate(|s| s.random()),
            Action::Shuffle => {
                self.navigate(|s| s.shuffle());
                self.message = Some("Deck shuffled".to_string());
            }
            Action::Master => self.master(),

            Action::StartAnswer => {
                self.mode = AppMode::Answering;
                self.message = None;
            }
            Action::Check | Action::Submit => self.check(),
            Action::Cancel => self.cancel(),

            Action::Input(c) => {
                if self.mode == AppMode::Answering {
                    let mut answer = self.session.user_answer().to_string();
                    answer.push(c);
                    self.session.set_answer(answer);
                }
            }

            Action::DeleteChar => {
                if self.mode == AppMode::Answering {
                    let mut answer = self.session.user_answer().to_string();
                    answer.pop();
                    self.session.set_answer(answer);
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    fn navigate(&mut self, op: impl FnOnce(&mut Session)) {
        op(&mut self.session);
        self.mode = AppMode::Normal;
        self.message = None;
    }

    // ============ 答题相关 ============

    /// 判定答案并回到普通模式
    pub fn check(&mut self) {
        let verdict = self.session.check();
        self.mode = AppMode::Normal;
        self.message = match verdict {
            Verdict::Correct => None,
            Verdict::Incorrect => Some("Streak reset".to_string()),
        };
    }

    // ============ 掌握相关 ============

    pub fn master(&mut self) {
        let question = self.session.current_fact().question.clone();
        let outcome = self.session.master();
        self.mode = AppMode::Normal;
        self.message = Some(match outcome {
            MasterOutcome::Removed => "Card mastered".to_string(),
            MasterOutcome::DeckReset => {
                info!("all cards mastered, deck restored");
                "All cards mastered! Deck restored".to_string()
            }
        });
        info!(%question, "mastered");
    }

    // ============ 通用操作 ============

    /// 取消当前输入
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.session.set_answer(String::new());
        self.message = None;
    }
}
