use chrono::{DateTime, Utc};

/// Calendar day in `YYYY-MM-DD` form, UTC. Both content issuance and the
/// play-gate key on this string, so they must agree on the timezone.
pub fn utc_today() -> String {
    day_of(&Utc::now())
}

pub fn day_of(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
