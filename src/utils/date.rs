use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Accepts `YYYY-MM-DD`, `today` and `tomorrow`.
pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today()),
        "tomorrow" => today()
            .succ_opt()
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(format!("{s} (expected YYYY-MM-DD)"))),
    }
}

/// Hour of day, `0..=24`. Accepts `14`, `14:00`, `2PM`, `2pm`, `12AM`.
pub fn parse_hour(s: &str) -> AppResult<u32> {
    let raw = s.trim().to_uppercase();
    let invalid = || AppError::InvalidHour(s.to_string());

    let (digits, meridiem) = if let Some(h) = raw.strip_suffix("AM") {
        (h.trim(), Some(false))
    } else if let Some(h) = raw.strip_suffix("PM") {
        (h.trim(), Some(true))
    } else {
        (raw.as_str(), None)
    };

    let digits = match digits.split_once(':') {
        Some((h, "00")) => h,
        Some(_) => return Err(invalid()),
        None => digits,
    };
    let hour: u32 = digits.parse().map_err(|_| invalid())?;

    match meridiem {
        None if hour <= 24 => Ok(hour),
        Some(pm) if (1..=12).contains(&hour) => Ok(match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        }),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24h_and_12h_hours() {
        assert_eq!(parse_hour("9").unwrap(), 9);
        assert_eq!(parse_hour("14:00").unwrap(), 14);
        assert_eq!(parse_hour("2pm").unwrap(), 14);
        assert_eq!(parse_hour("12PM").unwrap(), 12);
        assert_eq!(parse_hour("12AM").unwrap(), 0);
        assert_eq!(parse_hour("24").unwrap(), 24);
    }

    #[test]
    fn rejects_bad_hours() {
        assert!(parse_hour("25").is_err());
        assert!(parse_hour("13PM").is_err());
        assert!(parse_hour("9:30").is_err());
        assert!(parse_hour("nine").is_err());
    }

    #[test]
    fn parses_days() {
        assert_eq!(
            parse_day("2031-02-03").unwrap(),
            NaiveDate::from_ymd_opt(2031, 2, 3).unwrap()
        );
        assert!(parse_day("03/02/2031").is_err());
        assert_eq!(parse_day("today").unwrap(), today());
    }
}
