//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format a timestamp as DD.MM.YYYY HH:MM:SS in the zone it carries
/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02:26"
pub fn format_datetime<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format("%d.%m.%Y %H:%M:%S").to_string()
}
