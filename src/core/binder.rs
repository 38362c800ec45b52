use crate::core::calculator;
use crate::core::preferences::PreferenceStore;
use crate::domain::model::{human_age_display, AgeResult, DatePolicy, Locale, Species};
use crate::domain::ports::{Clock, KeyValueStore, Notifier, View};
use crate::utils::error::Result;

/// The bound presentation regions, built once at startup.
pub struct UiContext<V: View, N: Notifier> {
    pub view: V,
    pub notifier: N,
}

impl<V: View, N: Notifier> UiContext<V, N> {
    pub fn new(view: V, notifier: N) -> Self {
        Self { view, notifier }
    }
}

/// Event handlers wiring the preference store and the calculator to the
/// view. Each handler runs to completion before the next event.
pub struct ViewBinder<S: KeyValueStore, V: View, N: Notifier, C: Clock> {
    preferences: PreferenceStore<S>,
    ui: UiContext<V, N>,
    clock: C,
    locale: Locale,
}

impl<S: KeyValueStore, V: View, N: Notifier, C: Clock> ViewBinder<S, V, N, C> {
    pub fn new(preferences: PreferenceStore<S>, ui: UiContext<V, N>, clock: C, locale: Locale) -> Self {
        Self {
            preferences,
            ui,
            clock,
            locale,
        }
    }

    pub fn ui(&self) -> &UiContext<V, N> {
        &self.ui
    }

    /// Direct access to the view, for user edits that arrive before their event fires.
    pub fn ui_mut(&mut self) -> &mut UiContext<V, N> {
        &mut self.ui
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    /// Restore the persisted species, its citation block and birthdate.
    pub fn on_load(&mut self) {
        let species = self.preferences.selected_species();
        tracing::debug!("Restoring species: {}", species);

        self.ui.view.select_species(species);
        self.ui.view.show_reference(species);

        let date = self.preferences.load_date(species);
        self.ui.view.set_birthdate_input(&date);
    }

    pub fn on_species_change(&mut self, species: Species) {
        tracing::debug!("Switching species: {}", species);

        self.ui.view.select_species(species);
        self.ui.view.show_reference(species);
        self.preferences.save_species(species);

        match self.preferences.policy() {
            DatePolicy::PerSpecies => {
                let date = self.preferences.load_date(species);
                self.ui.view.set_birthdate_input(&date);
                // 日期可能不同，先隱藏結果
                self.ui.view.set_results_visible(false);
            }
            DatePolicy::Shared => {
                if self.ui.view.results_visible() {
                    // failures were already alerted
                    let _ = self.on_calculate();
                }
            }
        }
    }

    /// Persist the birthdate currently in the input for the selected species.
    pub fn on_date_change(&mut self) {
        let species = self.ui.view.selected_species();
        let date = self.ui.view.birthdate_input();
        self.preferences.save_date(species, &date);
    }

    /// Compute and display both ages. Validation failures are alerted
    /// and leave the view untouched.
    pub fn on_calculate(&mut self) -> Result<AgeResult> {
        let input = self.ui.view.birthdate_input();
        let species = self.ui.view.selected_species();

        let result = match calculator::calculate(&input, species, self.clock.now()) {
            Ok(result) => result,
            Err(e) => {
                if e.is_validation() {
                    tracing::warn!("Calculation rejected: {}", e);
                    self.ui.notifier.alert(&e.user_friendly_message(self.locale));
                }
                return Err(e);
            }
        };

        tracing::info!(
            "{} born {}: exact {:.3} years, human age {}",
            species,
            input,
            result.exact_years,
            result.human_age_years
        );

        self.ui
            .view
            .set_chronological_age(&result.chronological.display(self.locale));
        self.ui
            .view
            .set_human_age(&human_age_display(result.human_age_years, self.locale));
        self.ui.view.set_results_visible(true);

        Ok(result)
    }
}
