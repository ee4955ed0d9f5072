use super::{now, user_tracker};
use crate::libs::formatter::format_seconds;
use crate::libs::messages::Message;
use crate::libs::summary::{grand_total, parse_date, DateRange, SummaryCalculator};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, default_value = "month", help = "First day (YYYY-MM-DD, 'today', 'week' or 'month'), in UTC")]
    from: String,

    #[arg(long, default_value = "today", help = "Last day, inclusive (YYYY-MM-DD or 'today'), in UTC")]
    to: String,

    /// Also list totals per day
    #[arg(long)]
    daily: bool,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let (tracker, _) = user_tracker()?;
    let today = now().date_naive();
    let range = DateRange::new(parse_date(&args.from, today)?, parse_date(&args.to, today)?)?;

    msg_print!(
        Message::SummaryHeader(range.from.to_string(), range.to.to_string()),
        true
    );

    let totals = tracker.subject_totals(range)?;
    if totals.is_empty() {
        msg_info!(Message::NoStudyTimeInRange);
        return Ok(());
    }

    View::subject_totals(&totals)?;
    msg_print!(Message::SummaryTotal(format_seconds(grand_total(&totals).num_seconds())), true);

    if args.daily {
        let (days, total, average) = tracker.daily_totals(range)?.calculate_totals();
        msg_print!(Message::DailyTotalsHeader, true);
        View::daily_totals(&days, &total, &average)?;
        msg_print!(Message::SummaryDailyAverage(format_seconds(average.num_seconds())));
    }
    Ok(())
}
