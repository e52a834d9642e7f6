use std::fmt::Write;

use crate::models::{ParsedSignal, PriceLevel};

/// Reference signal in the supported template.
pub const EXAMPLE_SIGNAL: &str = "🆕 NEW CALL: JELLYJELLYUSDT 🆕
📊 Risk Analysis 📊
Volume(24H) Ranked: 408th/489
Risk Level: ⚠️ High
Entry: 0.0241
📝 Targets & Stop Loss
---------------------------------------
Level      Price    % Change from Entry
---------------------------------------
Target 1   0.0245   +1.66%
Target 2   0.0249   +3.32%
Target 3   0.0261   +8.30%
Target 4   0.0281   +16.60%
Stop Loss 1 0.0233  -3.32%
Stop Loss 2 0.0208  -13.69%
---------------------------------------";

const RULE: &str = "---------------------------------------";

/// Writes a signal back out in the template shape. Absent fields are omitted,
/// so the output reparses to the same [`ParsedSignal`].
pub fn render_signal(signal: &ParsedSignal) -> String {
    let mut out = String::new();

    if let Some(symbol) = &signal.symbol {
        let _ = writeln!(out, "🆕 NEW CALL: {symbol} 🆕");
    }
    out.push_str("📊 Risk Analysis 📊\n");
    if let Some((rank, total)) = signal.volume_rank_parts() {
        let _ = writeln!(
            out,
            "Volume(24H) Ranked: {rank}{}/{total}",
            ordinal_suffix(rank)
        );
    }
    if let Some(risk) = &signal.risk_level {
        let _ = writeln!(out, "Risk Level: {risk}");
    }
    if let Some(entry) = signal.entry {
        let _ = writeln!(out, "Entry: {entry}");
    }

    out.push_str("📝 Targets & Stop Loss\n");
    let _ = writeln!(out, "{RULE}");
    out.push_str("Level      Price    % Change from Entry\n");
    let _ = writeln!(out, "{RULE}");
    for t in &signal.targets {
        write_row(&mut out, "Target", t);
    }
    for sl in &signal.stop_losses {
        write_row(&mut out, "Stop Loss", sl);
    }
    out.push_str(RULE);

    out
}

fn write_row(out: &mut String, label: &str, row: &PriceLevel) {
    let _ = writeln!(
        out,
        "{} {:<3} {:<8} {:+}%",
        label, row.level, row.price, row.percentage_from_entry
    );
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
