//! Time-of-day labels for transcript entries.
//!
//! Labels use a 12-hour clock with two-digit hour and minute (`03:45 PM`).
//! In the browser the local time comes from `js_sys::Date`; elsewhere it
//! falls back to UTC from the system clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour wall-clock time as `hh:mm AM`/`hh:mm PM`.
#[must_use]
pub fn format_clock(hour24: u32, minute: u32) -> String {
    let meridiem = if hour24 % 24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{hour12:02}:{:02} {meridiem}", minute % 60)
}

/// Label for the current local time.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let of_day = secs % 86_400;
        let hour = u32::try_from(of_day / 3_600).unwrap_or(0);
        let minute = u32::try_from(of_day % 3_600 / 60).unwrap_or(0);
        format_clock(hour, minute)
    }
}
