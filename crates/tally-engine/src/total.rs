//! Totals and Number Formatting
//!
//! Grand total over the active rows plus the German-locale display used for
//! both the per-row value cells and the summary.

use crate::row::RowModel;

/// Fraction digits shown in default mode
const DEFAULT_FRACTION_DIGITS: u32 = 3;
/// Fraction digits shown in percent mode
const PERCENT_FRACTION_DIGITS: u32 = 2;

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Sum of row totals in catalog order
pub fn grand_total(rows: &[RowModel]) -> u64 {
    rows.iter()
        .fold(0u64, |sum, row| sum.saturating_add(row.row_total()))
}

/// Format an integer total for display. Stays exact over the full `u64`
/// range; `format_amount` only carries 53 bits.
pub fn format_total(total: u64, percent: bool) -> String {
    if percent {
        format!("{} %", total)
    } else {
        group_digits(&total.to_string(), true)
    }
}

/// Default mode: grouped ("1.234.567"). Percent mode: no grouping, up to two
/// fraction digits and a trailing " %" ("12,5 %").
pub fn format_amount(value: f64, percent: bool) -> String {
    if percent {
        format!("{} %", format_decimal(value, PERCENT_FRACTION_DIGITS, false))
    } else {
        format_decimal(value, DEFAULT_FRACTION_DIGITS, true)
    }
}

fn format_decimal(value: f64, max_fraction: u32, grouping: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let scale = 10u128.pow(max_fraction);
    let scaled = (value.abs() * scale as f64).round() as u128;
    let int_part = scaled / scale;
    let frac_part = scaled % scale;

    let mut out = String::new();
    if scaled != 0 {
        out.push_str(sign);
    }
    out.push_str(&group_digits(&int_part.to_string(), grouping));

    if frac_part != 0 {
        let frac = format!("{:0width$}", frac_part, width = max_fraction as usize);
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

fn group_digits(digits: &str, grouping: bool) -> String {
    if !grouping || digits.len() <= 3 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
