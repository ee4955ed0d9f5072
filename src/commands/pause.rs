use super::{now, user_tracker};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (mut tracker, _) = user_tracker()?;
    let session = tracker.pause(now())?;

    msg_success!(Message::SessionPaused(
        session.subject,
        format_seconds(session.accumulated_seconds)
    ));
    Ok(())
}
