/// Whole-currency amount with thousands separators, e.g. `Rp 1,234,567`.
pub fn rupiah(amount: f64) -> String {
    format!("Rp {}", group_thousands(amount))
}

/// Rounds to whole units and inserts `,` every three digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && rounded != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

pub fn risk_reward(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("1:{r:.2}"),
        None => "n/a".to_string(),
    }
}
