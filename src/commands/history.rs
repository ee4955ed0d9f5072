use super::{now, user_tracker};
use crate::libs::messages::Message;
use crate::libs::study::SessionGroup;
use crate::libs::summary::parse_date;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long, short, default_value = "today", help = "Day to list (YYYY-MM-DD, 'today' or 'yesterday'), in UTC")]
    date: String,

    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let (tracker, _) = user_tracker()?;
    let now = now();
    let date = parse_date(&args.date, now.date_naive())?;
    let sessions = tracker.history(date)?;

    if args.json {
        let views: Vec<_> = sessions.iter().map(|s| s.view(now)).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    let date_str = date.format("%Y-%m-%d").to_string();
    if sessions.is_empty() {
        msg_info!(Message::NoSessionsForDate(date_str));
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(date_str), true);
    View::sessions(&sessions.format(now))?;
    Ok(())
}
