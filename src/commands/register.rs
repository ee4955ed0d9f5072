use crate::db::users::Users;
use crate::libs::auth::AuthStore;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account name; prompted for when omitted
    username: Option<String>,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    let store = AuthStore::new()?;
    let username = match args.username {
        Some(username) => username,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;
    let confirmation = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPasswordConfirm.to_string())
        .allow_empty_password(true)
        .interact()?;

    let user = store.register(&Users::new()?, &username, &password, &confirmation)?;
    msg_success!(Message::Registered(user.username));
    Ok(())
}
