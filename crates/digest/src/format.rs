use chrono::{TimeZone, Utc};

/// Format a raw `changed` Unix timestamp as `dd.mm.yyyy HH:MM`, zero-padded,
/// always in UTC so the rendition is locale- and host-independent.
pub fn format_changed(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
