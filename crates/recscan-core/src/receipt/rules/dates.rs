//! Date extraction for receipt lines.

use chrono::NaiveDate;

use super::patterns::DATE;

/// Find a month-name date anywhere in the line and return the matched text.
pub fn match_date(line: &str) -> Option<&str> {
    DATE.find(line).map(|m| m.as_str())
}

/// Convert matched date text such as `Jan 5, 2024` into a calendar date.
pub fn parse_receipt_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE.captures(text)?;

    let month = month_to_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_to_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_date_inside_line() {
        assert_eq!(match_date("Paid on Jan 5, 2024"), Some("Jan 5, 2024"));
        assert_eq!(match_date("December 24 2023 store #12"), Some("December 24 2023"));
    }

    #[test]
    fn test_match_date_rejects() {
        assert_eq!(match_date("jan 5, 2024"), None);
        assert_eq!(match_date("Jan 2024"), None);
        assert_eq!(match_date("05/01/2024"), None);
        assert_eq!(match_date("Janitorial 5, 24"), None);
    }

    #[test]
    fn test_parse_receipt_date() {
        assert_eq!(
            parse_receipt_date("Jan 5, 2024"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_receipt_date("September 30 2023"),
            NaiveDate::from_ymd_opt(2023, 9, 30)
        );
        assert_eq!(parse_receipt_date("Feb 30, 2024"), None);
        assert_eq!(parse_receipt_date("Unknown Date"), None);
    }
}
