//! 答题会话 (Session)
//!
//! 持有牌组、会话状态以及注入的随机数源，所有操作都通过 `&mut self` 完成

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::grading::fuzzy_match;
use crate::models::Fact;

pub const CORRECT_FEEDBACK: &str = "✅ Correct!";

/// 判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// 掌握操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterOutcome {
    Removed,
    /// 最后一张卡被掌握，牌组已重置为完整题库
    DeckReset,
}

/// 会话状态的只读快照
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub fact: &'a Fact,
    pub position: usize,
    pub deck_len: usize,
    pub user_answer: &'a str,
    /// 仅在 revealed 时为 Some
    pub feedback: Option<&'a str>,
    pub revealed: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub mastered: &'a [Fact],
}

pub struct Session<R = StdRng> {
    catalog: Vec<Fact>,
    deck: Vec<Fact>,
    current_index: usize,
    user_answer: String,
    feedback: Option<String>,
    revealed: bool,
    current_streak: u32,
    longest_streak: u32,
    mastered: Vec<Fact>,
    rng: R,
}

impl Session<StdRng> {
    /// 有种子时结果可复现，否则使用系统熵
    pub fn with_seed(catalog: Vec<Fact>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(catalog, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn new(catalog: Vec<Fact>, rng: R) -> Self {
        assert!(!catalog.is_empty(), "catalog must contain at least one fact");
        Self {
            deck: catalog.clone(),
            catalog,
            current_index: 0,
            user_answer: String::new(),
            feedback: None,
            revealed: false,
            current_streak: 0,
            longest_streak: 0,
            mastered: Vec::new(),
            rng,
        }
    }

    // ============ 导航 ============

    pub fn next(&mut self) {
        let len = self.deck_len();
        self.current_index = (self.current_index + 1) % len;
        self.reset_card_state();
        debug!(index = self.current_index, "next card");
    }

    pub fn back(&mut self) {
        let len = self.deck_len();
        self.current_index = (self.current_index + len - 1) % len;
        self.reset_card_state();
        debug!(index = self.current_index, "previous card");
    }

    /// 可能再次抽到当前卡片
    pub fn random(&mut self) {
        let len = self.deck_len();
        self.current_index = self.rng.gen_range(0..len);
        self.reset_card_state();
        debug!(index = self.current_index, "random card");
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
        self.current_index = 0;
        self.reset_card_state();
        debug!(deck_len = self.deck.len(), "deck shuffled");
    }

    // ============ 答题 ============

    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.user_answer = text.into();
    }

    pub fn check(&mut self) -> Verdict {
        let answer = self.current_fact().answer.clone();
        let verdict = if fuzzy_match(&self.user_answer, &answer) {
            self.feedback = Some(CORRECT_FEEDBACK.to_string());
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
            Verdict::Correct
        } else {
            self.feedback = Some(format!("❌ Incorrect! The correct answer is {}.", answer));
            self.current_streak = 0;
            Verdict::Incorrect
        };
        self.revealed = true;
        debug!(
            ?verdict,
            current_streak = self.current_streak,
            longest_streak = self.longest_streak,
            "answer checked"
        );
        verdict
    }

    // ============ 掌握 ============

    pub fn master(&mut self) -> MasterOutcome {
        self.assert_index();
        let fact = self.deck.remove(self.current_index);
        debug!(question = %fact.question, "card mastered");
        self.mastered.push(fact);

        let outcome = if self.deck.is_empty() {
            self.deck = self.catalog.clone();
            debug!("deck exhausted, restored full catalog");
            MasterOutcome::DeckReset
        } else {
            MasterOutcome::Removed
        };

        self.current_index = 0;
        self.reset_card_state();
        outcome
    }

    // ============ 查询 ============

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            fact: self.current_fact(),
            position: self.current_index,
            deck_len: self.deck.len(),
            user_answer: &self.user_answer,
            feedback: if self.revealed {
                self.feedback.as_deref()
            } else {
                None
            },
            revealed: self.revealed,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            mastered: &self.mastered,
        }
    }

    pub fn current_fact(&self) -> &Fact {
        self.assert_index();
        &self.deck[self.current_index]
    }

    pub fn user_answer(&self) -> &str {
        &self.user_answer
    }

    #[cfg(test)]
    pub fn deck(&self) -> &[Fact] {
        &self.deck
    }

    /// 牌组在掌握操作之外不应为空
    fn deck_len(&self) -> usize {
        assert!(!self.deck.is_empty(), "deck is empty outside of master");
        self.deck.len()
    }

    fn assert_index(&self) {
        let len = self.deck_len();
        assert!(
            self.current_index < len,
            "card index {} out of range for deck of {}",
            self.current_index,
            len
        );
    }

    /// 切换卡片时统一清空输入、反馈和揭示标记
    fn reset_card_state(&mut self) {
        self.user_answer.clear();
        self.feedback = None;
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::builtin_catalog;

    fn session() -> Session {
        Session::with_seed(builtin_catalog(), Some(7))
    }

    fn answer(session: &mut Session, text: &str) -> Verdict {
        session.set_answer(text);
        session.check()
    }

    fn sorted_questions(facts: &[Fact]) -> Vec<String> {
        let mut questions: Vec<String> = facts.iter().map(|f| f.question.clone()).collect();
        questions.sort();
        questions
    }

    #[test]
    fn starts_at_first_card_with_clean_state() {
        let s = session();
        let snap = s.snapshot();
        assert_eq!(snap.position, 0);
        assert_eq!(snap.deck_len, 9);
        assert_eq!(snap.fact.answer, "Jupiter");
        assert_eq!(snap.current_streak, 0);
        assert_eq!(snap.longest_streak, 0);
        assert!(!snap.revealed);
        assert!(snap.feedback.is_none());
        assert!(snap.mastered.is_empty());
    }

    #[test]
    fn next_and_back_cycle_through_the_deck() {
        let mut s = session();
        s.next();
        s.next();
        let start = s.snapshot().position;

        for _ in 0..9 {
            s.next();
        }
        assert_eq!(s.snapshot().position, start);

        for _ in 0..9 {
            s.back();
        }
        assert_eq!(s.snapshot().position, start);
    }

    #[test]
    fn back_from_first_card_wraps_to_last() {
        let mut s = session();
        s.back();
        assert_eq!(s.snapshot().position, 8);
        s.next();
        assert_eq!(s.snapshot().position, 0);
    }

    #[test]
    fn random_stays_in_range() {
        let mut s = session();
        for _ in 0..200 {
            s.random();
            assert!(s.snapshot().position < 9);
        }
    }

    #[test]
    fn shuffle_keeps_the_same_facts_and_resets_index() {
        let mut s = session();
        s.next();
        s.next();
        s.shuffle();
        assert_eq!(s.snapshot().position, 0);
        assert_eq!(sorted_questions(s.deck()), sorted_questions(&builtin_catalog()));
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a = session();
        let mut b = session();
        a.shuffle();
        b.shuffle();
        assert_eq!(a.deck(), b.deck());
        a.random();
        b.random();
        assert_eq!(a.snapshot().position, b.snapshot().position);
    }

    #[test]
    fn streaks_track_consecutive_correct_answers() {
        let mut s = session();
        for _ in 0..3 {
            let correct = s.current_fact().answer.clone();
            assert_eq!(answer(&mut s, &correct), Verdict::Correct);
            s.next();
        }
        assert_eq!(s.snapshot().current_streak, 3);
        assert_eq!(s.snapshot().longest_streak, 3);

        assert_eq!(answer(&mut s, "definitely wrong"), Verdict::Incorrect);
        assert_eq!(s.snapshot().current_streak, 0);
        assert_eq!(s.snapshot().longest_streak, 3);
    }

    #[test]
    fn longest_streak_updates_on_the_record_card() {
        let mut s = session();
        answer(&mut s, "Jupiter");
        assert_eq!(s.snapshot().longest_streak, 1);
    }

    #[test]
    fn feedback_messages() {
        let mut s = session();
        answer(&mut s, "jupiter");
        assert_eq!(s.snapshot().feedback, Some(CORRECT_FEEDBACK));

        s.next();
        answer(&mut s, "Andromeda");
        assert_eq!(
            s.snapshot().feedback,
            Some("❌ Incorrect! The correct answer is Milky Way.")
        );
    }

    #[test]
    fn reveal_lasts_until_navigation() {
        let mut s = session();
        answer(&mut s, "Saturn");
        assert!(s.snapshot().revealed);
        s.set_answer("Jupiter");
        assert!(s.snapshot().revealed);

        s.random();
        let snap = s.snapshot();
        assert!(!snap.revealed);
        assert!(snap.feedback.is_none());
        assert_eq!(snap.user_answer, "");

        answer(&mut s, "x");
        s.master();
        assert!(!s.snapshot().revealed);
    }

    #[test]
    fn navigation_does_not_touch_streaks() {
        let mut s = session();
        answer(&mut s, "Jupiter");
        s.next();
        s.back();
        s.shuffle();
        s.master();
        assert_eq!(s.snapshot().current_streak, 1);
        assert_eq!(s.snapshot().longest_streak, 1);
    }

    #[test]
    fn master_moves_current_card_to_mastered() {
        let mut s = session();
        s.next();
        s.next();
        let target = s.current_fact().clone();

        assert_eq!(s.master(), MasterOutcome::Removed);
        let snap = s.snapshot();
        assert_eq!(snap.position, 0);
        assert_eq!(snap.deck_len, 8);
        assert_eq!(snap.mastered, &[target.clone()]);
        assert!(!s.deck().contains(&target));
    }

    #[test]
    fn mastering_last_card_restores_catalog() {
        let catalog = builtin_catalog();
        let mut s = Session::with_seed(vec![catalog[4].clone()], Some(1));
        assert_eq!(s.master(), MasterOutcome::DeckReset);
        assert_eq!(s.snapshot().mastered.len(), 1);
        assert_eq!(s.deck().len(), 1);

        let mut full = session();
        for _ in 0..8 {
            assert_eq!(full.master(), MasterOutcome::Removed);
        }
        full.shuffle();
        assert_eq!(full.master(), MasterOutcome::DeckReset);
        assert_eq!(full.deck(), catalog.as_slice());
        assert_eq!(full.snapshot().mastered.len(), 9);
    }

    #[test]
    fn mastered_order_survives_shuffle() {
        let mut s = session();
        let first = s.current_fact().clone();
        s.master();
        s.next();
        let second = s.current_fact().clone();
        s.master();
        s.shuffle();
        assert_eq!(s.snapshot().mastered, &[first, second]);
    }
}
