pub mod countdown;
pub mod delete;
pub mod edit;
pub mod history;
pub mod init;
pub mod login;
pub mod logout;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod pause;
pub mod register;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;
pub mod sum;
pub mod whoami;

use crate::db::sessions::Sessions;
use crate::libs::auth::{AuthSession, AuthStore};
use crate::libs::tracker::Tracker;
use anyhow::Result;
use chrono::{DateTime, SubsecRound, Utc};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create an account")]
    Register(register::RegisterArgs),
    #[command(about = "Log in")]
    Login(login::LoginArgs),
    #[command(about = "Log out")]
    Logout,
    #[command(about = "Show the logged-in account")]
    Whoami,
    #[command(about = "Start a study session", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Pause the running session")]
    Pause,
    #[command(about = "Resume the paused session")]
    Resume,
    #[command(about = "Stop the current session")]
    Stop,
    #[command(about = "Show the current session and the countdown")]
    Status(status::StatusArgs),
    #[command(about = "List study sessions for a day")]
    History(history::HistoryArgs),
    #[command(about = "Get study time per subject")]
    Sum(sum::SumArgs),
    #[command(about = "Show effective study time left until the target date")]
    Countdown,
    #[command(about = "Change the duration of a finished session", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete study sessions", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migration tools (debug builds)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Register(args) => register::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Whoami => whoami::cmd(),
            Commands::Start(args) => start::cmd(args),
            Commands::Pause => pause::cmd(),
            Commands::Resume => resume::cmd(),
            Commands::Stop => stop::cmd(),
            Commands::Status(args) => status::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Countdown => countdown::cmd(),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Tracker bound to the logged-in user; fails with "please log in" otherwise.
pub(crate) fn user_tracker() -> Result<(Tracker, AuthSession)> {
    let auth = AuthStore::new()?.require()?;
    let tracker = Tracker::new(Sessions::new()?, auth.user_id);
    Ok((tracker, auth))
}

pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
