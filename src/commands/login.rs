use crate::db::users::Users;
use crate::libs::auth::AuthStore;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(required = true)]
    username: String,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let store = AuthStore::new()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;

    let session = store.login(&Users::new()?, &login_args.username, &password)?;
    msg_success!(Message::LoggedIn(session.username));
    Ok(())
}
