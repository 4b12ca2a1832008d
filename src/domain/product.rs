use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// Formats an amount as New Taiwan dollars: `NT$ 1,200`, `NT$ 99.5`.
///
/// At most two decimals are kept, trailing zeros are dropped.
pub fn format_price(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    if fraction.is_empty() {
        format!("NT$ {sign}{grouped}")
    } else {
        format!("NT$ {sign}{grouped}.{fraction}")
    }
}
