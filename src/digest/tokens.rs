use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::models::TokenSet;

/// Currency amounts.
///
/// - `$` + digits, optional `,ddd` groups, optional `.dd` cents: `$5`, `$1,234.56`
/// - bare number, optional `,ddd` groups, optional `.dd`, optional single space,
///   then USD/EUR/GBP: `40 EUR`, `12.50usd`, `1,234.56 USD`
///
/// Case-insensitive throughout.
pub static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$\d+(?:,\d{3})*(?:\.\d{2})?|\b\d+(?:,\d{3})*(?:\.\d{2})? ?(?:USD|EUR|GBP)\b")
        .expect("static regex compile")
});

/// Date and time phrases, case-insensitive.
///
/// - abbreviated month + day: `Mar 3`, `sept 12`
/// - numeric `M/D`, `M/D/YY`, `M/D/YYYY`
/// - `today`, `tomorrow`, `tonight` as whole words
/// - clock time `H:MM` or `H.MM` with optional `am`/`pm`: `9:30`, `7.15 pm`
pub static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec)\s+\d{1,2}\b",
        r"|\b\d{1,2}/\d{1,2}(?:/\d{4}|/\d{2})?\b",
        r"|\b(?:today|tomorrow|tonight)\b",
        r"|\b\d{1,2}[:.]\d{2}(?: ?(?:am|pm))?\b",
    ))
    .expect("static regex compile")
});

/// All non-overlapping amount matches, leftmost first.
#[must_use]
pub fn extract_amounts(text: &str) -> Vec<String> {
    AMOUNT_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All non-overlapping date/time matches, leftmost first.
#[must_use]
pub fn extract_dates(text: &str) -> Vec<String> {
    DATE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lower-cased text after the last `@`; empty when there is no `@`.
#[must_use]
pub fn sender_domain(sender_email: &str) -> String {
    sender_email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .unwrap_or_default()
}

/// Amounts and dates come from the summary text, the domain from the sender
/// address; the three share nothing.
#[must_use]
pub fn extract_tokens(text: &str, sender_email: &str) -> TokenSet {
    let tokens = TokenSet {
        amounts: extract_amounts(text),
        dates: extract_dates(text),
        domain: sender_domain(sender_email),
    };

    debug!(
        amounts = tokens.amounts.len(),
        dates = tokens.dates.len(),
        domain = %tokens.domain,
        "Extracted tokens"
    );

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_amounts_with_separators_and_cents() {
        assert_eq!(
            extract_amounts("Total due: $1,234.56 by Friday"),
            vec!["$1,234.56"]
        );
        assert_eq!(extract_amounts("$5 then $5 again"), vec!["$5", "$5"]);
    }

    #[test]
    fn currency_code_amounts_any_case() {
        assert_eq!(
            extract_amounts("Refund of 40 EUR and 12.50usd, fee 3 gbp"),
            vec!["40 EUR", "12.50usd", "3 gbp"]
        );
        assert!(extract_amounts("USDC 40 EURO").is_empty());
    }

    #[test]
    fn currency_code_amounts_keep_thousands_groups() {
        assert_eq!(
            extract_amounts("Refund of 1,234.56 USD issued, plus 2,000,000 gbp"),
            vec!["1,234.56 USD", "2,000,000 gbp"]
        );
    }

    #[test]
    fn month_day_and_numeric_dates() {
        assert_eq!(
            extract_dates("Due Mar 3, renews 12/25/2024, then sept 9 or 1/2"),
            vec!["Mar 3", "12/25/2024", "sept 9", "1/2"]
        );
    }

    #[test]
    fn relative_words_and_clock_times() {
        assert_eq!(
            extract_dates("Call today at 9:30, dinner Tonight 7.15 pm, standup 10:00am"),
            vec!["today", "9:30", "Tonight", "7.15 pm", "10:00am"]
        );
        assert!(extract_dates("todays tomorrowland").is_empty());
    }

    #[test]
    fn clock_time_does_not_swallow_following_words() {
        assert_eq!(extract_dates("at 3:30 and 4:45 amazing"), vec!["3:30", "4:45"]);
    }

    #[test]
    fn domain_after_last_at_lowercased() {
        assert_eq!(sender_domain("user@Example.COM"), "example.com");
        assert_eq!(sender_domain("odd@name@Mail.Example.org"), "mail.example.org");
        assert_eq!(sender_domain("not-an-email"), "");
        assert_eq!(sender_domain("trailing@"), "");
    }
}
