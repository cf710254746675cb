//! Number and date normalization shared by the bank profiles.
//!
//! Romanian exports disagree on separators, so each profile says which
//! character groups thousands and which marks decimals.

/// Parse a signed amount token.
///
/// Every `grouping` character is removed, then the first `decimal` is turned
/// into `.`. Returns `None` if what remains is not a number.
pub fn parse_amount(raw: &str, grouping: Option<char>, decimal: char) -> Option<f64> {
    let mut s = raw.trim().to_string();
    if let Some(g) = grouping {
        s = s.replace(g, "");
    }
    if decimal != '.' {
        s = s.replacen(decimal, ".", 1);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Turn a `day<sep>month<sep>year` token into `year-MM-DD`.
///
/// Separators are any of `.`, `/`, `-`. A token that does not split into
/// exactly three parts comes back unchanged, so callers must not assume
/// the result is a valid ISO date.
pub fn normalize_date(raw: &str) -> String {
    let parts: Vec<&str> = raw.split(['.', '/', '-']).collect();
    match parts.as_slice() {
        [day, month, year] => format!("{year}-{month:0>2}-{day:0>2}"),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma_no_grouping() {
        assert_eq!(parse_amount("-123,45", None, ','), Some(-123.45));
        assert_eq!(parse_amount("250,00", None, ','), Some(250.0));
    }

    #[test]
    fn test_dot_grouping_comma_decimal() {
        assert_eq!(parse_amount("-1.234.567,89", Some('.'), ','), Some(-1234567.89));
        assert_eq!(parse_amount("45,99", Some('.'), ','), Some(45.99));
    }

    #[test]
    fn test_comma_grouping_dot_decimal() {
        assert_eq!(parse_amount("-2,500.10", Some(','), '.'), Some(-2500.10));
        assert_eq!(parse_amount("19.99", Some(','), '.'), Some(19.99));
    }

    #[test]
    fn test_garbage_amount() {
        assert_eq!(parse_amount("12,34,56", None, ','), None);
        assert_eq!(parse_amount("", None, ','), None);
    }

    #[test]
    fn test_dates_with_any_separator() {
        assert_eq!(normalize_date("05.03.2024"), "2024-03-05");
        assert_eq!(normalize_date("15/01/2024"), "2024-01-15");
        assert_eq!(normalize_date("31-12-2023"), "2023-12-31");
        assert_eq!(normalize_date("5.3.2024"), "2024-03-05");
    }

    #[test]
    fn test_date_fallback_returns_raw() {
        assert_eq!(normalize_date("2024"), "2024");
        assert_eq!(normalize_date("01.02.03.2024"), "01.02.03.2024");
    }
}
