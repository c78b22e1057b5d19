//! Self-graded quiz
//!
//! Progress (answered/total) is recomputed on every selection change; grading
//! is all-or-nothing and only happens on explicit request. Each grading run
//! fully recomputes from the current selections.

/// Per-question marker set at grading time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Qualitative feedback tier for a completed quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Top,
    Middle,
    Remedial,
}

impl Tier {
    pub fn message(self) -> &'static str {
        match self {
            Tier::Top => "Отлично! 👏",
            Tier::Middle => "Хорошо 😉",
            Tier::Remedial => "Нужно повторить теорию 😊",
        }
    }

    /// Tier for a score. The middle boundary is ceil(total/2), not a strict
    /// majority.
    pub fn for_score(correct: usize, total: usize) -> Self {
        if correct == total {
            Tier::Top
        } else if correct >= total.div_ceil(2) {
            Tier::Middle
        } else {
            Tier::Remedial
        }
    }
}

/// Outcome of a grading run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    /// At least one question is unanswered; no score is shown
    Incomplete,
    Scored { correct: usize, total: usize, tier: Tier },
}

impl GradeOutcome {
    pub fn message(&self) -> String {
        match self {
            GradeOutcome::Incomplete => "Ответь на все вопросы 🙂".to_string(),
            GradeOutcome::Scored { correct, total, tier } => {
                format!("Результат: {correct}/{total}. {}", tier.message())
            }
        }
    }
}

/// One single-choice question
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index of the expected answer
    pub correct: usize,
    selected: Option<usize>,
    verdict: Option<Verdict>,
}

impl Question {
    pub fn new(prompt: &'static str, options: &'static [&'static str], correct: usize) -> Self {
        Self { prompt, options, correct, selected: None, verdict: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
}

fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Что такое искусственный интеллект?",
            &[
                "Робот из фильмов",
                "Технологии, которые учатся на данных",
                "Обычная программа-калькулятор",
            ],
            1,
        ),
        Question::new(
            "Где ИИ уже используется сегодня?",
            &[
                "В рекомендациях и камерах смартфонов",
                "Нигде, это фантастика",
                "Только в секретных лабораториях",
            ],
            0,
        ),
        Question::new(
            "Кто отвечает за решения, принятые с помощью ИИ?",
            &["Сам ИИ", "Никто", "Человек"],
            2,
        ),
    ]
}

/// Quiz widget state
#[derive(Debug)]
pub struct Quiz {
    questions: Vec<Question>,

    /// Which question the cursor is on (UI navigation)
    pub cursor: usize,

    /// Outcome of the last grading run, for display
    last_outcome: Option<GradeOutcome>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::with_questions(default_questions())
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self { questions, cursor: 0, last_outcome: None }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn last_outcome(&self) -> Option<&GradeOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        }
    }

    /// Select an option for the question under the cursor; out-of-range
    /// indices are a no-op
    pub fn choose(&mut self, option: usize) {
        if let Some(question) = self.questions.get_mut(self.cursor) {
            if option < question.options.len() {
                question.selected = Some(option);
            }
        }
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.selected.is_some()).count()
    }

    /// Answered/total as a rounded integer percentage
    pub fn progress_percent(&self) -> u8 {
        let total = self.questions.len().max(1);
        let answered = self.answered_count();
        ((answered as f64 / total as f64) * 100.0).round() as u8
    }

    /// Grade the quiz. Prior verdicts are cleared first; answered questions
    /// are marked correct/wrong even when the run ends incomplete. If any
    /// question is unanswered the outcome is a prompt, not a score.
    pub fn grade(&mut self) -> GradeOutcome {
        for question in &mut self.questions {
            question.verdict = None;
        }

        let total = self.questions.len();
        let mut answered = 0;
        let mut correct = 0;

        for question in &mut self.questions {
            let Some(selected) = question.selected else { continue };
            answered += 1;
            if selected == question.correct {
                correct += 1;
                question.verdict = Some(Verdict::Correct);
            } else {
                question.verdict = Some(Verdict::Wrong);
            }
        }

        let outcome = if answered < total {
            GradeOutcome::Incomplete
        } else {
            GradeOutcome::Scored { correct, total, tier: Tier::for_score(correct, total) }
        };

        self.last_outcome = Some(outcome);
        outcome
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}
