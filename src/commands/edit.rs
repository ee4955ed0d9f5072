use super::user_tracker;
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Session id, as shown by `history`
    id: i64,

    /// New duration in minutes; fractions are allowed
    #[arg(long, short)]
    minutes: f64,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let (mut tracker, _) = user_tracker()?;
    let session = tracker.modify(args.id, args.minutes)?;

    msg_success!(Message::SessionEdited(
        args.id,
        format_seconds(session.duration_seconds.unwrap_or(0))
    ));
    Ok(())
}
