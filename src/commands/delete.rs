use super::user_tracker;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Ids of the sessions to delete
    #[arg(required = true, num_args = 1..)]
    ids: Vec<i64>,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let (mut tracker, _) = user_tracker()?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteSessions(args.ids.len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let deleted = tracker.delete(&args.ids)?;
    msg_success!(Message::SessionsDeleted(deleted));
    Ok(())
}
