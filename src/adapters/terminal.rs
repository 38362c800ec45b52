use crate::domain::model::{reference_text, Locale, Species};
use crate::domain::ports::{Notifier, View};

/// Page state kept in memory and rendered as text once the event has run.
#[derive(Debug, Clone)]
pub struct TerminalView {
    locale: Locale,
    birthdate: String,
    species: Species,
    reference: Species,
    results_visible: bool,
    chronological_age: String,
    human_age: String,
}

impl TerminalView {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            birthdate: String::new(),
            species: Species::default(),
            reference: Species::default(),
            results_visible: false,
            chronological_age: String::new(),
            human_age: String::new(),
        }
    }

    pub fn render(&self) -> String {
        let (species_label, birthdate_label, real_label, human_label) = match self.locale {
            Locale::ZhTw => ("物種", "出生日期", "實際年齡", "換算人類年齡"),
            Locale::En => ("Species", "Birthdate", "Real age", "Human age"),
        };

        let birthdate = if self.birthdate.is_empty() {
            "-"
        } else {
            self.birthdate.as_str()
        };

        let mut lines = vec![
            format!("{}: {}", species_label, self.species),
            format!("{}: {}", birthdate_label, birthdate),
        ];

        if self.results_visible {
            lines.push(format!("{}: {}", real_label, self.chronological_age));
            lines.push(format!("{}: {}", human_label, self.human_age));
        }

        lines.push(String::new());
        lines.push(reference_text(self.reference, self.locale).to_string());
        lines.join("\n")
    }
}

impl View for TerminalView {
    fn birthdate_input(&self) -> String {
        self.birthdate.clone()
    }

    fn set_birthdate_input(&mut self, value: &str) {
        self.birthdate = value.to_string();
    }

    fn selected_species(&self) -> Species {
        self.species
    }

    fn select_species(&mut self, species: Species) {
        self.species = species;
    }

    fn show_reference(&mut self, species: Species) {
        self.reference = species;
    }

    fn results_visible(&self) -> bool {
        self.results_visible
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn set_chronological_age(&mut self, text: &str) {
        self.chronological_age = text.to_string();
    }

    fn set_human_age(&mut self, text: &str) {
        self.human_age = text.to_string();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hides_results_until_visible() {
        let mut view = TerminalView::new(Locale::En);
        view.set_birthdate_input("2020-01-01");
        view.set_chronological_age("3 years 0 months");
        view.set_human_age("49 years");

        let hidden = view.render();
        assert!(hidden.contains("Birthdate: 2020-01-01"));
        assert!(!hidden.contains("Human age"));

        view.set_results_visible(true);
        let shown = view.render();
        assert!(shown.contains("Real age: 3 years 0 months"));
        assert!(shown.contains("Human age: 49 years"));
    }

    #[test]
    fn test_render_shows_selected_reference() {
        let mut view = TerminalView::new(Locale::ZhTw);
        assert!(view.render().contains("Cell Systems"));

        view.show_reference(Species::Cat);
        let text = view.render();
        assert!(text.contains("Feline Life Stage"));
        assert!(!text.contains("Cell Systems"));
    }
}
