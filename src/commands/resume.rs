use super::{now, user_tracker};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (mut tracker, _) = user_tracker()?;
    let session = tracker.resume(now())?;

    msg_success!(Message::SessionResumed(session.subject));
    Ok(())
}
