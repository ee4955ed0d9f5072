use super::{now, user_tracker};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// What you are studying, e.g. "Linear algebra"
    #[arg(required = true, num_args = 1..)]
    subject: Vec<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let (mut tracker, _) = user_tracker()?;
    let session = tracker.start(&args.subject.join(" "), now())?;

    msg_success!(Message::SessionStarted(session.subject));
    Ok(())
}
