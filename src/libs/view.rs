use crate::libs::formatter::{format_duration, format_local_datetime, format_seconds, FormattedSession};
use crate::libs::study::StudySession;
use crate::libs::summary::{DailySummary, SubjectTotal};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn sessions(sessions: &[FormattedSession]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["ID", "SUBJECT", "START", "END", "DURATION", "STATUS"]);
        for session in sessions {
            table.add_row(row![
                session.id,
                session.subject,
                session.start,
                session.end,
                session.duration,
                session.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn active_session(session: &StudySession, now: DateTime<Utc>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", session.id.unwrap_or_default()]);
        table.add_row(row!["SUBJECT", session.subject]);
        table.add_row(row!["STATUS", session.status]);
        table.add_row(row!["STARTED", format_local_datetime(&session.start_time)]);
        table.add_row(row!["ELAPSED", format_seconds(session.elapsed_seconds(now))]);
        table.printstd();

        Ok(())
    }

    pub fn subject_totals(totals: &[SubjectTotal]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["SUBJECT", "SESSIONS", "TIME"]);
        for total in totals {
            table.add_row(row![total.subject, r->total.sessions, r->format_seconds(total.total_seconds)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily_totals(days: &[DailySummary], total: &Duration, average: &Duration) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.set_titles(row!["DATE", "TIME"]);
        for day in days {
            table.add_row(row![day.date.format("%Y-%m-%d"), r->format_duration(&day.duration)]);
        }
        table.add_row(row![b->"TOTAL", br->format_duration(total)]);
        table.add_row(row![b->"AVERAGE", br->format_duration(average)]);
        table.printstd();

        Ok(())
    }
}
