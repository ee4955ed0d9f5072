//! Countdown to a target date measured in "effective" study hours.
//!
//! Only the part of each day between `effective_start_hour` and
//! `effective_end_hour` counts. The remaining effective time is then
//! expressed in effective days (one day = one full window), hours,
//! minutes and seconds.

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET: &str = "2025-12-20 08:30:00";
pub const TARGET_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountdownConfig {
    /// Local wall-clock time the countdown runs to.
    pub target: NaiveDateTime,

    pub effective_start_hour: u32,

    pub effective_end_hour: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        CountdownConfig {
            target: NaiveDateTime::parse_from_str(DEFAULT_TARGET, TARGET_FORMAT).unwrap_or_default(),
            effective_start_hour: 8,
            effective_end_hour: 22,
        }
    }
}

impl CountdownConfig {
    pub fn validate(&self) -> Result<()> {
        if self.effective_end_hour > 24 {
            bail!("effective_end_hour must be at most 24, got {}", self.effective_end_hour);
        }
        if self.effective_start_hour >= self.effective_end_hour {
            bail!(
                "effective_start_hour ({}) must be before effective_end_hour ({})",
                self.effective_start_hour,
                self.effective_end_hour
            );
        }
        Ok(())
    }

    pub fn seconds_per_effective_day(&self) -> i64 {
        (self.effective_end_hour as i64 - self.effective_start_hour as i64) * 3600
    }

    fn window(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = day.and_time(chrono::NaiveTime::MIN);
        (
            midnight + Duration::hours(self.effective_start_hour as i64),
            midnight + Duration::hours(self.effective_end_hour as i64),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub total_seconds: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// `now` was at or past the target.
    pub reached: bool,
}

impl Countdown {
    pub fn total_hours(&self) -> f64 {
        self.total_seconds as f64 / 3600.0
    }

    /// True once the target itself is reached, even if effective time ran out earlier.
    pub fn is_over(&self) -> bool {
        self.reached
    }

    /// `HH`, `MM`, `SS` parts, zero-padded.
    pub fn clock(&self) -> (String, String, String) {
        (
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        )
    }

    pub fn total_hours_formatted(&self) -> String {
        format_thousands_1dp(self.total_hours())
    }
}

pub fn calculate(config: &CountdownConfig, now: NaiveDateTime) -> Result<Countdown> {
    config.validate()?;

    let now = now.with_nanosecond(0).unwrap_or(now);
    let target = config.target;
    if now >= target {
        return Ok(Countdown {
            reached: true,
            ..Countdown::default()
        });
    }

    let mut total_seconds = 0i64;
    let mut day = now.date();
    while day <= target.date() {
        let (window_start, window_end) = config.window(day);
        let start = now.max(window_start);
        let end = target.min(window_end);
        if start < end {
            total_seconds += (end - start).num_seconds();
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    let per_day = config.seconds_per_effective_day();
    let days = total_seconds / per_day;
    let rest = total_seconds % per_day;

    Ok(Countdown {
        total_seconds,
        days,
        hours: rest / 3600,
        minutes: rest % 3600 / 60,
        seconds: rest % 60,
        reached: false,
    })
}

/// Formats with one decimal and comma thousands separators, e.g. `1,234.5`.
pub fn format_thousands_1dp(value: f64) -> String {
    let formatted = format!("{:.1}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "0"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.0" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
