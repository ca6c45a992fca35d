use time::format_description::FormatItem;
use time::macros::format_description;

const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_iso(date: &str) -> Option<time::Date> {
    time::Date::parse(date, ISO_DATE).ok()
}

pub fn format_iso(date: time::Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

/// Shift an ISO date by whole days. None when the input does not parse or
/// the shift leaves the supported range.
pub fn shift_iso(date: &str, days: i64) -> Option<String> {
    let parsed = parse_iso(date)?;
    let shifted = parsed.checked_add(time::Duration::days(days))?;
    Some(format_iso(shifted))
}

pub fn today_iso() -> String {
    format_iso(time::OffsetDateTime::now_utc().date())
}
