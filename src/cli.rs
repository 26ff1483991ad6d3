//! Command-line interface for smartcurator.
//!
//! With no subcommand the interactive menu starts. The other commands run a
//! single backend call and exit non-zero when it fails.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::{Config, API_BASE_ENV, DEFAULT_API_BASE, TOKEN_ENV};
use crate::forms::{LoginForm, QuickAddForm, RegisterForm, StatusLine};
use crate::types::{ContentType, Page};
use crate::{showcase, ui};

/// smartcurator - terminal front-end for the SmartCurator backend
#[derive(Parser, Debug)]
#[command(name = "smartcurator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = API_BASE_ENV, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Interactive,

    /// Log in and print the access token
    Login {
        #[arg(long, default_value = crate::forms::DEMO_EMAIL)]
        email: String,

        #[arg(long, default_value = crate::forms::DEMO_PASSWORD)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        full_name: Option<String>,
    },

    /// Queue a content item for processing
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        url: Option<String>,

        /// Memo or body text
        #[arg(long)]
        content: Option<String>,

        #[arg(long = "type", value_enum, default_value_t = ContentType::Url)]
        content_type: ContentType,

        /// Store as private content
        #[arg(long)]
        private: bool,

        /// Bearer token from `login`
        #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,
    },

    /// List your own content items
    Contents {
        #[arg(long, default_value = "0")]
        skip: u32,

        #[arg(short, long, default_value = "20")]
        limit: u32,

        /// Bearer token from `login`
        #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,
    },

    /// Show the hero banner, architecture map and roadmap
    About,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = Config::new(&self.api_base);
        let command = self.command.unwrap_or(Commands::Interactive);

        if let Commands::About = command {
            ui::print_showcase(&showcase::render_all());
            return Ok(());
        }

        let api = ApiClient::from_config(&config)?;
        match command {
            Commands::Interactive => ui::main_menu(api),
            Commands::Login { email, password } => {
                let outcome = LoginForm { email, password }.submit(&api);
                // Only the token goes to stdout so it can be captured.
                if let Some(token) = finish_quiet(outcome.status, outcome.token)? {
                    println!("{token}");
                }
                Ok(())
            }
            Commands::Register { email, password, full_name } => {
                let mut form = RegisterForm {
                    email,
                    password,
                    full_name: full_name.unwrap_or_default(),
                };
                finish(form.submit(&api), ())
            }
            Commands::Add {
                title,
                url,
                content,
                content_type,
                private,
                token,
            } => {
                let mut form = QuickAddForm {
                    title,
                    url: url.unwrap_or_default(),
                    content: content.unwrap_or_default(),
                    content_type,
                    is_public: !private,
                };
                finish(form.submit(&api, token.as_deref()), ())
            }
            Commands::Contents { skip, limit, token } => {
                let Some(token) = token else {
                    bail!("{}", crate::forms::LOGIN_REQUIRED_MESSAGE);
                };
                let rows = api.my_contents(&token, Page { skip, limit })?;
                ui::print_contents(&rows);
                Ok(())
            }
            Commands::About => Ok(()),
        }
    }
}

/// Turn a failed status line into an error so the process exits non-zero.
fn finish_quiet<T>(status: StatusLine, value: T) -> Result<T> {
    if !status.is_success() {
        bail!("{}", status.text);
    }
    Ok(value)
}

fn finish<T>(status: StatusLine, value: T) -> Result<T> {
    let value = finish_quiet(status.clone(), value)?;
    ui::print_status(&status);
    Ok(value)
}
