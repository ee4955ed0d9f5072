//! Current session plus the countdown, the landing view of the tracker.

use super::countdown::print_countdown;
use super::{now, user_tracker};
use crate::libs::config::Config;
use crate::libs::countdown;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use serde_json::json;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Print machine-readable JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let (tracker, _) = user_tracker()?;
    let now = now();
    let active = tracker.current()?;

    let config = Config::read()?.countdown.unwrap_or_default();
    let countdown = countdown::calculate(&config, Local::now().naive_local())?;

    if args.json {
        let (hours, minutes, seconds) = countdown.clock();
        let report = json!({
            "active_session": active.as_ref().map(|s| s.view(now)),
            "countdown": {
                "total_seconds": countdown.total_seconds,
                "days": countdown.days,
                "hours": hours,
                "minutes": minutes,
                "seconds": seconds,
                "total_effective_hours": countdown.total_hours_formatted(),
                "reached": countdown.is_over(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_countdown(&config, &countdown);

    match active {
        Some(session) => {
            msg_print!(Message::ActiveSessionHeader, true);
            View::active_session(&session, now)?;
        }
        None => msg_info!(Message::NoActiveSession, true),
    }
    Ok(())
}
