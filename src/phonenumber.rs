//! Display formatting for US phone numbers.

/// Format an E.164 US number for presentation.
///
/// `"+15035550100"` becomes `"+1 (503) 555-0100"`. Inputs that do not
/// look like a ten-digit US number are returned unchanged.
pub fn format_phone(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();

    // Accept "5035550100" or with a leading country code "15035550100".
    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return number.to_string(),
    };

    // Reject inputs with stray non-digit characters beyond "+", "-",
    // spaces, and parentheses.
    if !number
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return number.to_string();
    }

    format!(
        "+1 ({}) {}-{}",
        &national[0..3],
        &national[3..6],
        &national[6..10]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_e164_number() {
        assert_eq!(format_phone("+15035550100"), "+1 (503) 555-0100");
    }

    #[test]
    fn formats_bare_ten_digit_number() {
        assert_eq!(format_phone("5035550100"), "+1 (503) 555-0100");
    }

    #[test]
    fn formats_eleven_digits_with_country_code() {
        assert_eq!(format_phone("15035550100"), "+1 (503) 555-0100");
    }

    #[test]
    fn leaves_short_input_unchanged() {
        assert_eq!(format_phone("503555"), "503555");
    }

    #[test]
    fn leaves_non_numeric_input_unchanged() {
        assert_eq!(format_phone("not a number"), "not a number");
    }
}
