/// Utilities for date formatting
///
/// Order dates are shown as `dd-MM-yyyy` in the viewer's local time zone.
use chrono::{Local, NaiveDate, TimeZone};
use contracts::domain::a001_order::aggregate::parse_iso_date;

const ORDER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Format an ISO date or datetime as DD-MM-YYYY in local time.
/// Example: "2024-03-15T14:02:26.123Z" -> "15-03-2024"
///
/// Unparsable input is returned unchanged.
pub fn format_order_date(iso: &str) -> String {
    format_order_date_in(iso, &Local)
}

pub fn format_order_date_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> String {
    match parse_iso_date(iso, tz) {
        Some(date) => format_day(date),
        None => iso.to_string(),
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(ORDER_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_order_date() {
        assert_eq!(format_order_date_in("2024-03-15T14:02:26.123Z", &Utc), "15-03-2024");
        assert_eq!(format_order_date_in("2024-03-05", &Utc), "05-03-2024");
    }

    #[test]
    fn test_local_day_boundary() {
        let hanoi = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(format_order_date_in("2024-12-31T20:00:00Z", &hanoi), "01-01-2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_order_date_in("invalid", &Utc), "invalid");
        assert_eq!(format_order_date_in("", &Utc), "");
    }
}
