use anyhow::Context;
use clap::Parser;
use pet_age::domain::ports::View;
use pet_age::utils::error::ErrorSeverity;
use pet_age::utils::logger;
use pet_age::{
    CliConfig, Command, FileStore, PetAgeError, PreferenceStore, Settings, StderrNotifier,
    SystemClock, TerminalView, UiContext, ViewBinder,
};

fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, cli.log_json);
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.verbose, settings.log_json);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&cli, &settings) {
        let Some(app_error) = e.downcast_ref::<PetAgeError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        // validation 錯誤已經透過 notifier 提示過使用者
        if !app_error.is_validation() {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            eprintln!("💡 {}", app_error.recovery_suggestion());
        }

        let exit_code = match app_error.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig, settings: &Settings) -> anyhow::Result<()> {
    let store = FileStore::open(&settings.store_path)
        .with_context(|| format!("Failed to open preference file {}", settings.store_path))?;
    tracing::debug!("Using preference file {}", store.path().display());
    let preferences = PreferenceStore::new(store, settings.date_policy);
    let ui = UiContext::new(TerminalView::new(settings.locale), StderrNotifier);
    let mut binder = ViewBinder::new(preferences, ui, SystemClock, settings.locale);

    binder.on_load();

    match cli.command.clone().unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Species { species } => binder.on_species_change(species),
        Command::Date { birthdate } => {
            binder.ui_mut().view.set_birthdate_input(&birthdate);
            binder.on_date_change();
        }
        Command::Calculate { species, date } => {
            if let Some(species) = species {
                binder.on_species_change(species);
            }
            if let Some(date) = date {
                binder.ui_mut().view.set_birthdate_input(&date);
                binder.on_date_change();
            }
            binder.on_calculate()?;
        }
    }

    println!("{}", binder.ui().view.render());
    Ok(())
}
