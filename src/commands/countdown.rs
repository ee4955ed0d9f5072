use crate::libs::config::Config;
use crate::libs::countdown::{self, Countdown, CountdownConfig, TARGET_FORMAT};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let config = Config::read()?.countdown.unwrap_or_default();
    let countdown = countdown::calculate(&config, Local::now().naive_local())?;
    print_countdown(&config, &countdown);
    Ok(())
}

pub(crate) fn print_countdown(config: &CountdownConfig, countdown: &Countdown) {
    msg_print!(Message::CountdownHeader(config.target.format(TARGET_FORMAT).to_string()), true);

    if countdown.is_over() {
        msg_info!(Message::CountdownOver);
        return;
    }

    let (hours, minutes, seconds) = countdown.clock();
    msg_print!(Message::CountdownRemaining {
        days: countdown.days,
        hours,
        minutes,
        seconds,
    });
    msg_print!(Message::CountdownTotalHours(countdown.total_hours_formatted()));
}
