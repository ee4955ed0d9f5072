use super::{now, user_tracker};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (mut tracker, _) = user_tracker()?;
    let session = tracker.stop(now())?;

    msg_success!(Message::SessionStopped(
        session.subject,
        format_seconds(session.duration_seconds.unwrap_or(0))
    ));
    Ok(())
}
