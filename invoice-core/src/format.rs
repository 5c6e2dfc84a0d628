//! Currency formatting and amount-in-words conversion.
//!
//! Amounts print on the Indian numbering scale (thousand, lakh, crore), both
//! as grouped digits and as English words. Everything here is pure: missing
//! or malformed values degrade to placeholders instead of erroring.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder printed where an amount is absent.
pub const NOT_SPECIFIED: &str = "Not specified";

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Format an optional amount as rupees: `Some(125000)` → `"₹1,25,000"`,
/// `None` → `"Not specified"`. Never produces a garbled number.
pub fn format_currency(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) => format!("₹{}", rupees(value)),
        None => NOT_SPECIFIED.to_string(),
    }
}

/// Round to the whole rupee shown on the document: half away from zero.
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to whole rupees and group the digits Indian-style:
/// `125000` → `"1,25,000"`.
///
/// Only display paths call this; totals keep full precision upstream.
pub fn rupees(value: Decimal) -> String {
    let rounded = round_rupees(value);
    let grouped = group_indian(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Convert a non-negative amount to English words on the Indian scale.
///
/// `0` → `"Zero"`; a decimal remainder is spoken digit by digit after
/// `"Point"`. Negative inputs clamp to zero (amounts are non-negative by
/// construction). Deterministic: no locale or global state.
pub fn number_to_words(amount: Decimal) -> String {
    let amount = amount.max(Decimal::ZERO);
    let mut words = integer_words(amount.trunc().to_u128().unwrap_or(0));

    let fraction = amount.fract().normalize();
    if !fraction.is_zero() {
        words.push_str(" Point");
        let rendered = fraction.to_string();
        if let Some((_, digits)) = rendered.split_once('.') {
            for digit in digits.chars() {
                words.push(' ');
                words.push_str(digit_word(digit));
            }
        }
    }
    words
}

fn integer_words(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let crore = n / 10_000_000;
    let rest = n % 10_000_000;
    let lakh = (rest / 100_000) as u64;
    let thousand = (rest % 100_000 / 1_000) as u64;
    let below_thousand = (rest % 1_000) as u64;

    if crore > 0 {
        parts.push(format!("{} Crore", integer_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousand)));
    }
    if below_thousand > 0 {
        parts.push(three_digit_words(below_thousand));
    }
    parts.join(" ")
}

// n in 1..=99
fn two_digit_words(n: u64) -> String {
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

// n in 1..=999
fn three_digit_words(n: u64) -> String {
    let hundreds = n / 100;
    let remainder = n % 100;
    match (hundreds, remainder) {
        (0, r) => two_digit_words(r),
        (h, 0) => format!("{} Hundred", ONES[h as usize]),
        (h, r) => format!("{} Hundred {}", ONES[h as usize], two_digit_words(r)),
    }
}

fn digit_word(digit: char) -> &'static str {
    match digit {
        '0' => "Zero",
        '1' => "One",
        '2' => "Two",
        '3' => "Three",
        '4' => "Four",
        '5' => "Five",
        '6' => "Six",
        '7' => "Seven",
        '8' => "Eight",
        _ => "Nine",
    }
}

// Indian grouping: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    let mut reversed: Vec<char> = Vec::with_capacity(digits.len() + digits.len() / 2);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count == 3 || (count > 3 && (count - 3) % 2 == 0) {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    reversed.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_placeholder_for_missing_amount() {
        assert_eq!(format_currency(None), NOT_SPECIFIED);
    }

    #[test]
    fn currency_zero() {
        assert_eq!(format_currency(Some(Decimal::ZERO)), "₹0");
    }

    #[test]
    fn currency_groups_indian_style() {
        assert_eq!(format_currency(Some(dec!(125000))), "₹1,25,000");
        assert_eq!(format_currency(Some(dec!(1000))), "₹1,000");
        assert_eq!(format_currency(Some(dec!(100))), "₹100");
        assert_eq!(format_currency(Some(dec!(10000000))), "₹1,00,00,000");
        assert_eq!(format_currency(Some(dec!(123456789))), "₹12,34,56,789");
    }

    #[test]
    fn currency_rounds_to_whole_rupees_for_display() {
        assert_eq!(format_currency(Some(dec!(2360.4))), "₹2,360");
        assert_eq!(format_currency(Some(dec!(2360.5))), "₹2,361");
    }

    #[test]
    fn words_zero() {
        assert_eq!(number_to_words(Decimal::ZERO), "Zero");
    }

    #[test]
    fn words_ones_and_teens() {
        assert_eq!(number_to_words(dec!(1)), "One");
        assert_eq!(number_to_words(dec!(9)), "Nine");
        assert_eq!(number_to_words(dec!(10)), "Ten");
        assert_eq!(number_to_words(dec!(13)), "Thirteen");
        assert_eq!(number_to_words(dec!(19)), "Nineteen");
    }

    #[test]
    fn words_tens_multiples() {
        assert_eq!(number_to_words(dec!(20)), "Twenty");
        assert_eq!(number_to_words(dec!(45)), "Forty Five");
        assert_eq!(number_to_words(dec!(90)), "Ninety");
        assert_eq!(number_to_words(dec!(99)), "Ninety Nine");
    }

    #[test]
    fn words_exact_hundreds() {
        assert_eq!(number_to_words(dec!(100)), "One Hundred");
        assert_eq!(number_to_words(dec!(500)), "Five Hundred");
        assert_eq!(number_to_words(dec!(105)), "One Hundred Five");
    }

    #[test]
    fn words_thousands() {
        assert_eq!(number_to_words(dec!(1000)), "One Thousand");
        assert_eq!(
            number_to_words(dec!(1234)),
            "One Thousand Two Hundred Thirty Four"
        );
        assert_eq!(number_to_words(dec!(99999)), "Ninety Nine Thousand Nine Hundred Ninety Nine");
    }

    #[test]
    fn words_lakhs_and_crores() {
        assert_eq!(number_to_words(dec!(100000)), "One Lakh");
        assert_eq!(
            number_to_words(dec!(125000)),
            "One Lakh Twenty Five Thousand"
        );
        assert_eq!(number_to_words(dec!(10000000)), "One Crore");
        assert_eq!(
            number_to_words(dec!(23456789)),
            "Two Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine"
        );
    }

    #[test]
    fn words_use_indian_scale_not_millions() {
        // 1,000,000 is ten lakh, never "One Million".
        assert_eq!(number_to_words(dec!(1000000)), "Ten Lakh");
    }

    #[test]
    fn words_decimal_remainder_spoken_digit_by_digit() {
        assert_eq!(number_to_words(dec!(12.5)), "Twelve Point Five");
        assert_eq!(number_to_words(dec!(100.25)), "One Hundred Point Two Five");
        // Trailing zeros in the stored scale do not change the spoken form.
        assert_eq!(number_to_words(dec!(12.50)), "Twelve Point Five");
    }

    #[test]
    fn words_negative_clamps_to_zero() {
        assert_eq!(number_to_words(dec!(-42)), "Zero");
    }

    #[test]
    fn words_are_deterministic_across_calls() {
        let first = number_to_words(dec!(765432));
        let second = number_to_words(dec!(765432));
        assert_eq!(first, second);
    }
}
