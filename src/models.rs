use serde::{Deserialize, Serialize};
use std::fmt;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// 题目卡片（创建后不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub subject: String,
}

impl Fact {
    pub fn new(question: &str, answer: &str, difficulty: Difficulty, subject: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty,
            subject: subject.to_string(),
        }
    }
}

/// 牌组 TOML 文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckData {
    #[serde(default)]
    pub facts: Vec<Fact>,
}

/// 内置题库，顺序固定
pub fn builtin_catalog() -> Vec<Fact> {
    use Difficulty::*;

    vec![
        Fact::new(
            "What is the largest planet in our solar system?",
            "Jupiter",
            Easy,
            "Earth Science",
        ),
        Fact::new("What galaxy do we live in?", "Milky Way", Medium, "Astronomy"),
        Fact::new(
            "What is the hottest planet in our solar system?",
            "Venus",
            Medium,
            "Earth Science",
        ),
        Fact::new(
            "What is the speed of light in vacuum (in km/s)?",
            "300000",
            Hard,
            "Physics",
        ),
        Fact::new(
            "Which planet is known as the Red Planet?",
            "Mars",
            Easy,
            "Earth Science",
        ),
        Fact::new(
            "Which Apollo mission was the first to land humans on the Moon?",
            "Apollo 11",
            Medium,
            "Space Exploration",
        ),
        Fact::new(
            "What was the name of the spacecraft that carried astronauts to the Moon during Apollo 11?",
            "Eagle",
            Medium,
            "Space Exploration",
        ),
        Fact::new(
            "What is the goal of NASA's Artemis program?",
            "To return humans to the Moon and establish a sustainable presence",
            Medium,
            "Space Exploration",
        ),
        Fact::new(
            "Which rocket will launch the Artemis missions?",
            "Space Launch System (SLS)",
            Hard,
            "Space Technology",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_nine_facts_in_order() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog[0].answer, "Jupiter");
        assert_eq!(catalog[4].answer, "Mars");
        assert_eq!(catalog[8].difficulty, Difficulty::Hard);
        assert_eq!(catalog[8].subject, "Space Technology");
    }

    #[test]
    fn difficulty_displays_its_name() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }
}
