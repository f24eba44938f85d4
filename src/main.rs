use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use macro_log_rs::cli::{Cli, Command};
use macro_log_rs::credentials::CredentialProvider;
use macro_log_rs::error::{Result, TrackerError};
use macro_log_rs::interface::{
    MealAction, WeightAction, display_chart, display_meal, display_weight_entry,
    prompt_meal_action, prompt_weight_action, prompt_yes_no,
};
use macro_log_rs::lifecycle::MountGuard;
use macro_log_rs::meal::{MealScreen, load_meal};
use macro_log_rs::remote::{HttpTrackerApi, TrackerApi};
use macro_log_rs::weight::{WeightScreen, header_date};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = HttpTrackerApi::new(cli.api_url.clone());
    let credentials = cli.credentials();
    info!(api = %api.base_url(), "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command.unwrap_or_default() {
        Command::Weight => runtime.block_on(cmd_weight(&api, credentials.as_ref())),
        Command::Meal { file } => runtime.block_on(cmd_meal(&file, &api)),
        Command::History => runtime.block_on(cmd_history(&api, credentials.as_ref())),
    }
}

/// Show a meal and let the user remove foods from it.
async fn cmd_meal(file: &Path, api: &dyn TrackerApi) -> Result<()> {
    if !file.exists() {
        eprintln!("Meal file not found: {}", file.display());
        return Ok(());
    }

    let guard = MountGuard::new();
    let mut screen = MealScreen::mount(load_meal(file)?);

    loop {
        display_meal(&screen);

        let slot = match prompt_meal_action(&screen)? {
            MealAction::Back => break,
            MealAction::Remove(slot) => slot,
        };

        let pending = match screen.begin_removal(slot) {
            Ok(pending) => pending,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let name = pending.entry().description.clone();

        // Row is drawn fading while the API decides.
        display_meal(&screen);
        println!("Removing {}...", name);

        let outcome = api.remove_food(pending.entry()).await;
        if !guard.is_mounted() {
            break;
        }

        screen.finish_removal(pending, &outcome);
        match outcome {
            Ok(()) => println!("Removed {}.", name),
            Err(e) => println!("Could not remove {}: {}", name, e),
        }
    }

    guard.unmount();
    Ok(())
}

/// Keypad weight entry with the history chart underneath.
async fn cmd_weight(api: &dyn TrackerApi, credentials: &dyn CredentialProvider) -> Result<()> {
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();
    screen.load_history(credentials, api, &guard).await;

    let date = header_date(chrono::Local::now().date_naive());
    let mut cursor = 0;

    loop {
        display_weight_entry(&date, screen.buffer());
        display_chart(&screen.chart());

        let (selected, action) = prompt_weight_action(cursor)?;
        cursor = selected;

        match action {
            WeightAction::Press(key) => screen.press(key)?,
            WeightAction::Log => match screen.submit(credentials, api, &guard).await {
                Ok(log) => println!("Logged {:.1}.", log.weight),
                Err(TrackerError::Unauthenticated) => {
                    println!("No token found. Sign in first.");
                }
                Err(e) => println!("Could not log weight: {}", e),
            },
            WeightAction::Back => {
                if screen.buffer().is_empty()
                    || prompt_yes_no("Discard the unsaved weight?", true)?
                {
                    break;
                }
            }
        }
    }

    guard.unmount();
    Ok(())
}

/// Print the weight history chart and exit.
async fn cmd_history(api: &dyn TrackerApi, credentials: &dyn CredentialProvider) -> Result<()> {
    let guard = MountGuard::new();
    let mut screen = WeightScreen::mount();
    screen.load_history(credentials, api, &guard).await;
    display_chart(&screen.chart());
    Ok(())
}
