//! Static page content and the example tab switcher
//!
//! The page is a fixed ordered list of sections. Text sections carry their
//! body inline; widget sections (examples, chat lab, quiz) are rendered by
//! their own components.

/// Stable section identifiers, the anchors for in-page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Examples,
    Lab,
    Quiz,
}

/// What a section contains
#[derive(Debug, Clone, Copy)]
pub enum SectionKind {
    Text(&'static str),
    Examples,
    Chat,
    Quiz,
}

/// One section of the page
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub kind: SectionKind,
}

/// The page, in display order
pub const SECTIONS: &[Section] = &[
    Section {
        id: SectionId::Hero,
        title: "Искусственный интеллект",
        kind: SectionKind::Text(
            "Интерактивная страница о том, что такое ИИ, где он уже работает \
             и как проверить свои знания. Листай вниз — секции открываются по \
             мере прокрутки.",
        ),
    },
    Section {
        id: SectionId::About,
        title: "Что такое ИИ",
        kind: SectionKind::Text(
            "Искусственный интеллект — это технологии, которые позволяют \
             компьютерам учиться на данных и решать задачи: распознавать \
             изображения, прогнозировать события, генерировать текст. ИИ не \
             «думает» как человек: он находит закономерности в примерах, на \
             которых его обучили, и применяет их к новым данным.",
        ),
    },
    Section { id: SectionId::Examples, title: "Примеры использования", kind: SectionKind::Examples },
    Section { id: SectionId::Lab, title: "Лаборатория: мини-ИИ", kind: SectionKind::Chat },
    Section { id: SectionId::Quiz, title: "Проверь себя", kind: SectionKind::Quiz },
];

/// Index of a section in [`SECTIONS`]
pub fn section_index(id: SectionId) -> Option<usize> {
    SECTIONS.iter().position(|s| s.id == id)
}

/// One named example entry
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    pub code: &'static str,
}

/// The fixed example table; the set of valid names is fixed at startup
pub const EXAMPLES: &[Example] = &[
    Example {
        name: "recs",
        label: "Рекомендации",
        text: "ИИ анализирует историю просмотров, лайков и времени просмотра, \
               чтобы понять предпочтения и рекомендовать похожий контент.",
        code: "similarity = cosine_similarity(userA, userB)\nrecommend(similar_users)",
    },
    Example {
        name: "vision",
        label: "Зрение",
        text: "Компьютерное зрение распознаёт объекты, лица, номера, знаки — \
               по изображению/видео.",
        code: "img -> preprocess -> model.predict -> decode_objects",
    },
    Example {
        name: "health",
        label: "Медицина",
        text: "В медицине ИИ помогает находить признаки заболеваний на снимках \
               и анализировать данные пациента.",
        code: "risk = model.predict_proba(features)\nif risk>0.7: alert_doctor()",
    },
    Example {
        name: "cars",
        label: "Автопилот",
        text: "Автопилот объединяет камеры/лидар/радар, распознаёт окружение и \
               строит траекторию движения.",
        code: "sensors -> detect_objects -> planner -> control",
    },
];

/// Which example is currently displayed
#[derive(Debug, Clone, Default)]
pub struct ExampleTabs {
    active: usize,
}

impl ExampleTabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an example by name. Unknown names are a no-op and the previous
    /// selection stays displayed.
    pub fn select(&mut self, name: &str) -> bool {
        match EXAMPLES.iter().position(|e| e.name == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Select an example by table index; out-of-range indices are a no-op
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < EXAMPLES.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &'static Example {
        &EXAMPLES[self.active]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_all_sections_in_order() {
        let ids: Vec<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                SectionId::Hero,
                SectionId::About,
                SectionId::Examples,
                SectionId::Lab,
                SectionId::Quiz
            ]
        );
    }

    #[test]
    fn section_index_resolves_known_ids() {
        assert_eq!(section_index(SectionId::Hero), Some(0));
        assert_eq!(section_index(SectionId::Quiz), Some(SECTIONS.len() - 1));
    }

    #[test]
    fn first_example_is_active_by_default() {
        let tabs = ExampleTabs::new();
        assert_eq!(tabs.active().name, "recs");
    }

    #[test]
    fn select_by_name_switches_tab() {
        let mut tabs = ExampleTabs::new();
        assert!(tabs.select("vision"));
        assert_eq!(tabs.active().name, "vision");
    }

    #[test]
    fn unknown_name_keeps_previous_selection() {
        let mut tabs = ExampleTabs::new();
        assert!(tabs.select("recs"));
        assert!(!tabs.select("doesNotExist"));
        assert_eq!(tabs.active().name, "recs");
        assert_eq!(tabs.active().text, EXAMPLES[0].text);
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut tabs = ExampleTabs::new();
        tabs.select("cars");
        assert!(!tabs.select_index(EXAMPLES.len()));
        assert_eq!(tabs.active().name, "cars");
    }
}
