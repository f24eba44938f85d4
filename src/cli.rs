use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::credentials::{CredentialProvider, FileCredentials, StaticCredentials};
use crate::remote::DEFAULT_API_URL;

/// macro_log — meal details and weight logging for the macro tracker.
#[derive(Parser, Debug)]
#[command(name = "macro_log")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the tracker API.
    #[arg(long, global = true, env = "MACRO_LOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token. Overrides the token file in the data directory.
    #[arg(long, global = true, env = "MACRO_LOG_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory holding the `userToken` file.
    #[arg(long, global = true, env = "MACRO_LOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log today's weight with the keypad and view the history chart.
    Weight,

    /// Show a meal's foods and macro totals, and remove foods from it.
    Meal {
        /// Path to the meal JSON file.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print the weight history chart.
    History,
}

impl Default for Command {
    fn default() -> Self {
        Command::Weight
    }
}

impl Cli {
    /// Data directory: `--data-dir`, else `<user data dir>/macro_log`, else the
    /// working directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("macro_log"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    /// Credential source for authenticated calls.
    pub fn credentials(&self) -> Box<dyn CredentialProvider> {
        match &self.token {
            Some(token) => Box::new(StaticCredentials::new(token.clone())),
            None => Box::new(FileCredentials::in_dir(self.data_dir())),
        }
    }
}
