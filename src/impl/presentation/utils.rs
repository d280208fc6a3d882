use chrono::NaiveDate;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, INR = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with a leading currency symbol, the currency's number of
/// decimal places and Indian digit grouping (1,20,000.00), regardless of
/// currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i128.pow(decimal_places);
    // Round once in minor units so 0.999 becomes 1.00 and not 0.00. Totals of
    // capped cheque amounts stay far below the i128 range.
    let minor_units = (amount.abs() * scale as f64).round() as i128;
    let sign = if amount < 0.0 && minor_units != 0 { "-" } else { "" };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en_IN);
    if decimal_places == 0 {
        format!("{}{}{}", sign, currency.symbol(), integer_part)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            integer_part,
            minor_units % scale,
            width = decimal_places as usize,
        )
    }
}

/// Day-first date without zero padding, as en-IN displays it (5/6/2024).
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
