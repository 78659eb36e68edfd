use chrono::NaiveDate;

pub fn date_to_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{date_to_string, parse_date};

    #[test]
    fn test_date_to_string() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(date_to_string(date), "2025-02-28".to_string());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29"),
            Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(parse_date("2025-02-29"), None);
        assert_eq!(parse_date("28.02.2025"), None);
    }
}
