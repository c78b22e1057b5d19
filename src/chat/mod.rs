//! Canned-answer chat lab
//!
//! Free-text questions are matched against a fixed ordered knowledge table:
//! the first entry whose keyword set has any keyword contained in the
//! lowercased question wins. Answers arrive after a fixed simulated
//! "thinking" delay; the delay is a one-shot timer, never canceled, so two
//! rapid questions each get their own reply in arrival order.

use std::time::{Duration, Instant};

/// Fixed simulated "thinking" delay before a reply appears
pub const THINKING_DELAY: Duration = Duration::from_millis(450);

/// Greeting seeded into an empty transcript
pub const GREETING: &str = "Привет! Я мини-ИИ. Нажми на пример вопроса ниже или напиши свой 🙂";

/// Answer used when no knowledge entry matches
pub const FALLBACK_ANSWER: &str = "Я пока отвечаю на базовые вопросы про ИИ. Попробуй спросить: \
                                   “Что такое ИИ?”, “Где используется ИИ?”, “Плюсы/минусы ИИ?”.";

pub const STATUS_IDLE: &str = "Задай вопрос про ИИ";
pub const STATUS_THINKING: &str = "ИИ думает…";
pub const STATUS_DONE: &str = "Готово. Можно спросить ещё.";

/// Example questions offered as one-key shortcuts
pub const HINTS: &[&str] = &[
    "Что такое ИИ?",
    "Где используется ИИ?",
    "Какие плюсы у ИИ?",
    "Опасен ли ИИ?",
];

/// One keyword-set-to-answer mapping
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub keys: &'static [&'static str],
    pub answer: &'static str,
}

/// The knowledge table. Order is significant: it is the precedence rule
/// between overlapping keyword sets.
pub const KNOWLEDGE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keys: &["что такое", "искусственный интеллект", "ии"],
        answer: "ИИ — это технологии, которые позволяют компьютерам учиться на данных и решать \
                 задачи: распознавать, прогнозировать, генерировать текст.",
    },
    KnowledgeEntry {
        keys: &["где используется", "где используют", "применяют", "используется"],
        answer: "ИИ используют в рекомендациях (YouTube/Netflix), смартфонах (камера), медицине \
                 (анализ снимков), банках (скоринг), транспорте (ассистенты водителя).",
    },
    KnowledgeEntry {
        keys: &["плюсы", "преимущества"],
        answer: "Плюсы: скорость анализа данных, автоматизация рутины, помощь человеку в \
                 решениях, повышение точности в типовых задачах.",
    },
    KnowledgeEntry {
        keys: &["минусы", "недостатки"],
        answer: "Минусы: ошибки, зависимость от данных, возможная предвзятость, отсутствие \
                 “понимания” как у человека.",
    },
    KnowledgeEntry {
        keys: &["опасен", "опасность", "безопасно"],
        answer: "Опасность чаще в неправильном использовании. Проверяй факты, не делись \
                 приватными данными и помни: ответственность всегда на человеке.",
    },
];

/// Look up the canned answer for a question. First match in table order wins;
/// no match yields the fixed fallback.
pub fn find_answer(question: &str) -> &'static str {
    let text = question.to_lowercase();
    KNOWLEDGE
        .iter()
        .find(|entry| entry.keys.iter().any(|key| text.contains(key)))
        .map(|entry| entry.answer)
        .unwrap_or(FALLBACK_ANSWER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry; the transcript is append-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// A reply scheduled but not yet delivered
#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    question: String,
}

/// Chat widget state
#[derive(Debug)]
pub struct Chat {
    transcript: Vec<Message>,
    pending: Vec<PendingReply>,
    status: &'static str,
    thinking: bool,
}

impl Chat {
    /// Create a chat with the greeting seeded into the empty transcript
    pub fn new() -> Self {
        Self {
            transcript: vec![Message { role: Role::Assistant, text: GREETING.to_string() }],
            pending: Vec::new(),
            status: STATUS_IDLE,
            thinking: false,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn status(&self) -> &'static str {
        self.status
    }

    /// Whether the thinking indicator is shown. Set by every ask and cleared
    /// by every delivered reply, so with overlapping asks it can go dark
    /// while a later reply is still pending, exactly like the original
    /// indicator.
    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// Submit a question. Empty or whitespace-only input is a no-op. The
    /// user message is appended synchronously; the reply is scheduled for
    /// `now + THINKING_DELAY` and is not cancelable.
    pub fn ask(&mut self, question: &str, now: Instant) {
        let question = question.trim();
        if question.is_empty() {
            return;
        }

        self.transcript.push(Message { role: Role::User, text: question.to_string() });
        self.status = STATUS_THINKING;
        self.thinking = true;
        self.pending.push(PendingReply { due: now + THINKING_DELAY, question: question.to_string() });
    }

    /// Deliver every due reply, in arrival order
    pub fn poll(&mut self, now: Instant) {
        while self.pending.first().is_some_and(|reply| reply.due <= now) {
            let reply = self.pending.remove(0);
            let answer = find_answer(&reply.question);
            self.thinking = false;
            self.transcript.push(Message { role: Role::Assistant, text: answer.to_string() });
            self.status = STATUS_DONE;
        }
    }
}

impl Default for Chat {
    fn default() -> Self {
        Self::new()
    }
}
