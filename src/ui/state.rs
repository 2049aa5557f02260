//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::session::Session;

/// 应用状态
pub struct App {
    pub session: Session,
    pub mode: AppMode,
    pub message: Option<String>,
    pub show_help: bool,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Answering,
}

impl App {
    /// 创建新的应用实例
    pub fn new(session: Session) -> Self {
        Self {
            session,
            mode: AppMode::Normal,
            message: None,
            show_help: false,
        }
    }
}
