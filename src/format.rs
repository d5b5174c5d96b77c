//! Indian-locale money rendering: digit grouping, currency symbols, and
//! amount-to-words conversion for statutory documents.
//!
//! Display call sites never branch before formatting, so every function here
//! degrades to the `"--"` placeholder on non-finite input instead of
//! panicking or erroring.

/// Shown in place of amounts that cannot be formatted.
pub const PLACEHOLDER: &str = "--";

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Formats an amount with 2 fixed fraction digits and Indian digit grouping:
/// the last 3 integer digits form one group, then every group above is 2
/// digits (`12345678.9` → `1,23,45,678.90`).
///
/// Operates on the absolute value; sign handling belongs to the caller.
pub fn group_indian(amount: f64) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}.{}", group_digits_indian(int_part), frac_part)
}

/// Same as [`group_indian`] but with `None` degrading to the placeholder,
/// for call sites fed straight from optional record fields.
pub fn display_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => group_indian(value),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_digits_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn group_digits_thousands(digits: &str) -> String {
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(&digits[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(",")
}

fn currency_symbol(code: &str) -> String {
    match code {
        "INR" => "₹".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "AED" => "د.إ".to_string(),
        "CAD" => "C$".to_string(),
        "SGD" => "S$".to_string(),
        "AUD" => "A$".to_string(),
        other => format!("{} ", other),
    }
}

/// Prefixes the currency symbol for `code` and groups the amount: Indian
/// grouping for INR, plain thousands grouping for every other code, 2 fixed
/// fraction digits either way. Unrecognized codes fall back to `"<code> "`.
pub fn format_currency(amount: f64, code: &str) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let symbol = currency_symbol(code);
    if code == "INR" {
        return format!("{}{}", symbol, group_indian(amount));
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}.{}", symbol, group_digits_thousands(int_part), frac_part)
}

/// Renders a rupee amount in Indian-English words using the
/// Crore/Lakh/Thousand/Hundred place-value system.
///
/// `amount_in_words(0.0)` is exactly `"Rupees Zero Only"`. Nonzero paise
/// (rounded from the fraction) append an `"and Paise <words>"` clause, and
/// negative amounts are prefixed `"Minus "`.
pub fn amount_in_words(amount: f64) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let negative = amount < 0.0;
    let abs = amount.abs();
    let rupees = abs.floor() as u64;
    let paise = ((abs - abs.floor()) * 100.0).round() as u64;

    let mut out = String::new();
    if negative {
        out.push_str("Minus ");
    }
    out.push_str("Rupees ");

    if rupees == 0 {
        out.push_str("Zero");
    } else {
        out.push_str(&integer_in_words(rupees));
    }

    if paise > 0 {
        out.push_str(" and Paise ");
        out.push_str(&integer_in_words(paise));
    }

    out.push_str(" Only");
    out
}

fn integer_in_words(mut n: u64) -> String {
    let mut parts = Vec::new();

    let crore = n / 10_000_000;
    n %= 10_000_000;
    if crore > 0 {
        // Crores can themselves exceed 999 (hundred-crore amounts).
        parts.push(format!("{} Crore", integer_in_words(crore)));
    }

    let lakh = n / 100_000;
    n %= 100_000;
    if lakh > 0 {
        parts.push(format!("{} Lakh", words_below_1000(lakh)));
    }

    let thousand = n / 1_000;
    n %= 1_000;
    if thousand > 0 {
        parts.push(format!("{} Thousand", words_below_1000(thousand)));
    }

    if n > 0 {
        parts.push(words_below_1000(n));
    }

    parts.join(" ")
}

fn words_below_1000(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }

    if rest > 0 {
        if rest < 20 {
            parts.push(ONES[rest as usize].to_string());
        } else {
            let tens_word = TENS[(rest / 10) as usize];
            let ones_digit = rest % 10;
            if ones_digit > 0 {
                parts.push(format!("{} {}", tens_word, ONES[ones_digit as usize]));
            } else {
                parts.push(tens_word.to_string());
            }
        }
    }

    parts.join(" ")
}
