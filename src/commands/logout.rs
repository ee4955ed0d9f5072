use crate::libs::auth::{AuthStore, Logout};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    match AuthStore::new()?.logout()? {
        Logout::LoggedOut(username) => msg_success!(Message::LoggedOut(username)),
        Logout::Discarded => msg_warning!(Message::UnreadableLoginRemoved),
        Logout::NotLoggedIn => msg_info!(Message::NotLoggedIn),
    }
    Ok(())
}
