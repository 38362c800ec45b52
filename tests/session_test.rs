use chrono::{NaiveDate, TimeZone, Utc};
use pet_age::domain::ports::View;
use pet_age::{
    DatePolicy, FileStore, FixedClock, Locale, PreferenceStore, Species, StderrNotifier,
    TerminalView, UiContext, ViewBinder,
};
use std::path::Path;
use tempfile::TempDir;

type Session = ViewBinder<FileStore, TerminalView, StderrNotifier, FixedClock>;

/// Simulates a page load: a fresh binder over whatever the file holds.
fn load_page(path: &Path, policy: DatePolicy) -> Session {
    let now = Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    );

    let store = FileStore::open(path).unwrap();
    let preferences = PreferenceStore::new(store, policy);
    let ui = UiContext::new(TerminalView::new(Locale::En), StderrNotifier);
    let mut session = ViewBinder::new(preferences, ui, FixedClock(now), Locale::En);
    session.on_load();
    session
}

#[test]
fn test_per_species_date_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let mut page = load_page(&path, DatePolicy::PerSpecies);
    page.ui_mut().view.set_birthdate_input("2020-05-01");
    page.on_date_change();
    page.on_species_change(Species::Cat);
    page.ui_mut().view.set_birthdate_input("2018-11-11");
    page.on_date_change();
    page.on_species_change(Species::Dog);

    let page = load_page(&path, DatePolicy::PerSpecies);
    assert_eq!(page.ui().view.selected_species(), Species::Dog);
    assert_eq!(page.ui().view.birthdate_input(), "2020-05-01");

    let mut page = page;
    page.on_species_change(Species::Cat);
    let page = load_page(&path, DatePolicy::PerSpecies);
    assert_eq!(page.ui().view.selected_species(), Species::Cat);
    assert_eq!(page.ui().view.birthdate_input(), "2018-11-11");
}

#[test]
fn test_shared_date_survives_reload_for_either_species() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let mut page = load_page(&path, DatePolicy::Shared);
    page.ui_mut().view.set_birthdate_input("2021-01-31");
    page.on_date_change();

    let mut page = load_page(&path, DatePolicy::Shared);
    assert_eq!(page.ui().view.birthdate_input(), "2021-01-31");

    page.on_species_change(Species::Cat);
    let page = load_page(&path, DatePolicy::Shared);
    assert_eq!(page.ui().view.selected_species(), Species::Cat);
    assert_eq!(page.ui().view.birthdate_input(), "2021-01-31");
}

#[test]
fn test_results_are_hidden_after_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let mut page = load_page(&path, DatePolicy::PerSpecies);
    page.ui_mut().view.set_birthdate_input("2023-10-17");
    page.on_date_change();
    page.on_calculate().unwrap();
    assert!(page.ui().view.render().contains("Human age: 49 years"));

    let page = load_page(&path, DatePolicy::PerSpecies);
    let rendered = page.ui().view.render();
    assert!(rendered.contains("Birthdate: 2023-10-17"));
    assert!(!rendered.contains("Human age"));
}
