//! # Shared Formatting Functions
//!
//! Display formatting used by every view of the tracker.
//!
//! - [`format_price`] - Dollar price with exactly three decimals (`"$ 63245.679"`)
//! - [`format_supply`] - Supply figure printed the way upstream reports it
//! - [`format_number`] - Number with thousands separators
//! - [`format_percentage`] - Signed percentage change
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, format_percentage};
//!
//! assert_eq!(format_price(63245.6789), "$ 63245.679");
//! assert_eq!(format_percentage(-1.234), "-1.23%");
//! ```

/// Format a USD price as `"$ "` followed by the value rounded to three decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(63245.6789), "$ 63245.679");
/// assert_eq!(format_price(0.5), "$ 0.500");
/// ```
pub fn format_price(price: f64) -> String {
    format!("$ {:.3}", price)
}

/// Format a supply figure. Whole numbers print without a fractional part.
///
/// ```rust
/// use shared::utils::format_supply;
///
/// assert_eq!(format_supply(21_000_000.0), "21000000");
/// assert_eq!(format_supply(1234.5), "1234.5");
/// ```
pub fn format_supply(supply: f64) -> String {
    format!("{}", supply)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(-1000.0, 0), "-1,000");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format percentage change with an explicit sign for gains.
///
/// Changes that round to zero carry no sign.
///
/// ```rust
/// use shared::utils::format_percentage;
///
/// assert_eq!(format_percentage(2.5), "+2.50%");
/// assert_eq!(format_percentage(-0.004), "0.00%");
/// ```
pub fn format_percentage(pct: f64) -> String {
    let magnitude = format!("{:.2}", pct.abs());
    if magnitude == "0.00" {
        "0.00%".to_string()
    } else if pct > 0.0 {
        format!("+{}%", magnitude)
    } else {
        format!("-{}%", magnitude)
    }
}
