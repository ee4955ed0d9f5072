use crate::db::users::Users;
use crate::libs::auth::AuthStore;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let Some(session) = AuthStore::new()?.current()? else {
        msg_info!(Message::NotLoggedIn);
        return Ok(());
    };

    if Users::new()?.get_by_id(session.user_id)?.is_none() {
        msg_bail_anyhow!(Message::AccountMissing(session.username));
    }

    msg_print!(Message::WhoAmI(session.username));
    Ok(())
}
