use chrono::Weekday;

/// Higher/Lower only runs twice a week. Enforced at the endpoint, before any
/// store access, so the window applies even when persistence is down.
pub fn higherlower_open(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Tue | Weekday::Sat)
}
