use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parses the end/creation dates the backend and the survey form use:
/// RFC 3339, or a naive `YYYY-MM-DD HH:MM[:SS]` / `YYYY-MM-DDTHH:MM[:SS]`
/// taken as local time. A bare `YYYY-MM-DD` means local midnight.
pub fn parse_survey_date(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 5] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| anyhow::anyhow!("Unrecognized date: {}", s))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("Nonexistent local time: {}", s))
}

/// `dd.mm.yyyy`, or the raw string when it cannot be parsed.
pub fn format_day(s: &str) -> String {
    match parse_survey_date(s) {
        Ok(dt) => dt.with_timezone(&Local).format("%d.%m.%Y").to_string(),
        Err(_) => s.to_string(),
    }
}

/// A survey stays open until its end date; unparseable dates count as closed.
pub fn is_open(end_date: &str, at: DateTime<Utc>) -> bool {
    parse_survey_date(end_date)
        .map(|end| end > at)
        .unwrap_or(false)
}
