//! # Quiz
//!
//! The quiz scorer. The view reveals feedback on each answer, then
//! auto-advances after a fixed delay; the delay itself belongs to the
//! app layer, so this state machine exposes the advance as an explicit
//! [`QuizState::advance`] step.
//!
//! Answering the same question twice is a guarded no-op, and the final
//! score is reported exactly once on completion.

use serde::{Deserialize, Serialize};

/// Delay before auto-advancing past revealed feedback.
pub const FEEDBACK_DELAY_MS: u64 = 1500;

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub answer: usize,
    pub points: i64,
}

/// Feedback on the answered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// The quiz state machine.
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<Question>,
    current: usize,
    score: i64,
    /// Set once the current question has been answered, until advance.
    feedback: Option<(usize, Feedback)>,
    finished: bool,
    score_reported: bool,
}

impl QuizState {
    /// The demo question set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_questions(demo_questions())
    }

    /// Build a quiz over the given questions.
    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let finished = questions.is_empty();
        Self {
            questions,
            current: 0,
            score: 0,
            feedback: None,
            finished,
            score_reported: false,
        }
    }

    /// The active question, if the quiz is still running.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Zero-based index of the active question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Points earned so far.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feedback for the answered option, while revealed.
    #[must_use]
    pub fn feedback(&self) -> Option<(usize, Feedback)> {
        self.feedback
    }

    /// Answer the current question with an option index.
    ///
    /// Scores on a correct answer and records feedback. A second
    /// answer while feedback is revealed, an out-of-range option, or
    /// answering a finished quiz all no-op.
    pub fn answer(&mut self, option: usize) -> Option<Feedback> {
        if self.finished || self.feedback.is_some() {
            return None;
        }
        let question = self.questions.get(self.current)?;
        if option >= question.options.len() {
            return None;
        }

        let feedback = if option == question.answer {
            self.score = self.score.saturating_add(question.points);
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        self.feedback = Some((option, feedback));
        Some(feedback)
    }

    /// Advance past revealed feedback (called after the fixed delay).
    ///
    /// No-op unless feedback is currently revealed.
    pub fn advance(&mut self) {
        if self.feedback.take().is_none() {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }

    /// The final score, reported exactly once after completion.
    ///
    /// The caller applies it to the ledger as a single delta.
    pub fn take_final_score(&mut self) -> Option<i64> {
        if self.finished && !self.score_reported {
            self.score_reported = true;
            Some(self.score)
        } else {
            None
        }
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_questions() -> Vec<Question> {
    let q = |prompt: &str, options: &[&str], answer: usize, points: i64| Question {
        prompt: prompt.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        answer,
        points,
    };
    vec![
        q(
            "Which of these is a renewable energy source?",
            &["Coal", "Solar", "Natural Gas", "Oil"],
            1,
            20,
        ),
        q(
            "What does 'composting' primarily help reduce?",
            &["Air pollution", "Landfill waste", "Water usage", "Noise pollution"],
            1,
            20,
        ),
        q(
            "The 'Three Rs' of waste management are Reduce, Reuse, and...?",
            &["Recycle", "Replant", "Review", "Remove"],
            0,
            10,
        ),
    ]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answers_accumulate_score() {
        let mut quiz = QuizState::new();

        assert_eq!(quiz.answer(1), Some(Feedback::Correct));
        quiz.advance();
        assert_eq!(quiz.answer(1), Some(Feedback::Correct));
        quiz.advance();
        assert_eq!(quiz.answer(0), Some(Feedback::Correct));
        quiz.advance();

        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 50);
    }

    #[test]
    fn incorrect_answer_scores_nothing() {
        let mut quiz = QuizState::new();
        assert_eq!(quiz.answer(0), Some(Feedback::Incorrect));
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn double_answer_is_guarded() {
        let mut quiz = QuizState::new();
        quiz.answer(1);
        // Feedback revealed: a second answer must no-op.
        assert!(quiz.answer(0).is_none());
        assert_eq!(quiz.score(), 20);
    }

    #[test]
    fn advance_without_feedback_is_noop() {
        let mut quiz = QuizState::new();
        quiz.advance();
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn final_score_reported_exactly_once() {
        let mut quiz = QuizState::new();
        while !quiz.is_finished() {
            quiz.answer(1);
            quiz.advance();
        }

        assert_eq!(quiz.take_final_score(), Some(quiz.score()));
        assert_eq!(quiz.take_final_score(), None); // Second take no-ops
    }

    #[test]
    fn out_of_range_option_is_noop() {
        let mut quiz = QuizState::new();
        assert!(quiz.answer(10).is_none());
        assert!(quiz.feedback().is_none());
    }
}
