use serde_json::Value;

/// Print just the headline number from the output.
///
/// For the summary that is the monthly payment; for schedule and yearly
/// outputs it is the final row's remaining balance.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Row arrays carry their headline on the last row.
    let target = match result {
        Value::Array(arr) => arr.last().unwrap_or(result),
        other => other,
    };

    let priority_keys = [
        "monthly_payment",
        "total_interest",
        "total_payments",
        "ending_balance",
        "remaining_balance",
    ];

    if let Value::Object(map) = target {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(target));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
