pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Columns holding monetary amounts, across every result shape.
pub(crate) const MONEY_COLUMNS: &[&str] = &[
    "payment",
    "principal",
    "interest",
    "remaining_balance",
    "ending_balance",
    "loan_amount",
    "monthly_payment",
    "total_payments",
    "total_interest",
    "home_value",
    "deposit",
];

/// Column order for schedule and yearly rows. serde_json sorts object keys
/// alphabetically; a ledger reads better in ledger order.
pub(crate) fn ordered_headers(map: &serde_json::Map<String, Value>) -> Vec<String> {
    let preferred: &[&str] = if map.contains_key("month") {
        &[
            "month",
            "payment_date",
            "payment",
            "principal",
            "interest",
            "remaining_balance",
            "year",
        ]
    } else {
        &["year", "principal", "interest", "ending_balance"]
    };

    let mut headers: Vec<String> = preferred
        .iter()
        .filter(|k| map.contains_key(**k))
        .map(|k| k.to_string())
        .collect();
    for key in map.keys() {
        if !headers.iter().any(|h| h == key) {
            headers.push(key.clone());
        }
    }
    headers
}
