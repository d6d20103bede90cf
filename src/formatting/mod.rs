//! Human-readable renderings of counts and monetary amounts.


use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_PLACES: u32 = 2;

/// Whole number with thousands separators: `1234567` becomes `1,234,567`.
pub fn format_number(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Dollar amount with two decimal places and thousands separators: `$1,234.56`.
pub fn format_currency(value: Decimal) -> String {
    let text = fixed_places(value, CURRENCY_PLACES);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.as_str())
    };

    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    if fraction.is_empty() {
        format!("${sign}{}", group_thousands(integer))
    } else {
        format!("${sign}{}.{fraction}", group_thousands(integer))
    }
}

/// Compact dollar amount using `K`, `M`, and `B` suffixes; smaller values fall back to
/// [`format_currency`].
pub fn format_large_number(value: Decimal) -> String {
    let thousand = Decimal::from(1_000u64);
    let million = Decimal::from(1_000_000u64);
    let billion = Decimal::from(1_000_000_000u64);

    if value >= billion {
        format!("${}B", fixed_places(value / billion, CURRENCY_PLACES))
    } else if value >= million {
        format!("${}M", fixed_places(value / million, CURRENCY_PLACES))
    } else if value >= thousand {
        format!("${}K", fixed_places(value / thousand, CURRENCY_PLACES))
    } else {
        format_currency(value)
    }
}

/// Megabytes with two decimals, for in-memory size reporting.
pub fn format_megabytes(bytes: usize) -> String {
    let megabytes = Decimal::from(bytes) / Decimal::from(1_048_576u64);
    format!("{} MB", fixed_places(megabytes, CURRENCY_PLACES))
}

fn fixed_places(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);

    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    rounded.to_string()
}

fn group_thousands(digits: &str) -> String {
    let length = digits.len();
    let mut grouped = String::with_capacity(length + length / 3);

    for (index, character) in digits.chars().enumerate() {
        if index != 0 && (length - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(character);
    }

    grouped
}
