use std::fmt::Write;

use super::format::{or_na, risk_reward, rupiah};
use super::ScenarioReport;

impl ScenarioReport {
    /// Plain-text report suitable for saving next to the CSV export.
    pub fn to_text(&self) -> String {
        let s = &self.signal;
        let r = &self.result;
        let c = &self.config;
        let mut out = String::new();

        let _ = writeln!(out, "PARTIAL TP CALCULATOR REPORT");
        let _ = writeln!(out, "========================");
        let _ = writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "SIGNAL INFORMATION:");
        let _ = writeln!(out, "- Symbol: {}", or_na(s.symbol.as_deref()));
        let _ = writeln!(out, "- Risk Level: {}", or_na(s.risk_level.as_deref()));
        let _ = writeln!(out, "- Volume Rank: {}", or_na(s.volume_rank.as_deref()));
        let _ = writeln!(out);
        let _ = writeln!(out, "CONFIGURATION:");
        let _ = writeln!(out, "- Trading Mode: {}", c.mode);
        let _ = writeln!(out, "- Modal: {}", rupiah(c.modal));
        let _ = writeln!(out, "- Leverage: {}x", c.leverage);
        let _ = writeln!(out, "- Entry Price: {:.4}", r.entry);
        let _ = writeln!(out, "- Position Size: {:.4}", r.position_size);
        let _ = writeln!(out);
        let _ = writeln!(out, "TAKE PROFIT LEVELS:");
        for row in &r.target_rows {
            let _ = writeln!(
                out,
                "- TP{}: {:.4} ({:.1}% position) = {}",
                row.level,
                row.target_price,
                row.allocation_pct,
                rupiah(row.profit)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "STOP LOSS LEVELS:");
        for sl in &r.stop_loss_rows {
            let _ = writeln!(
                out,
                "- SL{}: {:.4} = {} ({:.2}% loss)",
                sl.level,
                sl.price,
                rupiah(sl.loss),
                sl.loss_percent
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "SUMMARY:");
        let _ = writeln!(
            out,
            "- Total Profit (All TP): {} ({:.2}% ROI)",
            rupiah(r.total_profit),
            r.roi_percent
        );
        if let (Some(p), Some(roi)) = (r.partial_profit, r.partial_roi_percent) {
            let _ = writeln!(
                out,
                "- Partial Profit (TP1 & TP2): {} ({:.2}% ROI)",
                rupiah(p),
                roi
            );
        }
        let _ = writeln!(
            out,
            "- Risk/Reward Ratio: {}",
            risk_reward(r.risk_reward_ratio)
        );
        let _ = writeln!(out, "- Distribution Method: {}", c.distribution.label());

        out
    }

    pub fn print_summary(&self) {
        let s = &self.signal;
        let r = &self.result;

        println!("\n{}", "=".repeat(70));
        println!("  PARTIAL TP SCENARIO: {}", s.symbol_or_unknown());
        println!("{}", "=".repeat(70));
        println!("  Entry:         {:.4}", r.entry);
        println!("  Volume Rank:   {}", or_na(s.volume_rank.as_deref()));
        println!("  Risk Level:    {}", or_na(s.risk_level.as_deref()));
        println!();
        println!("  SIZING");
        println!("  ───────────────────────────────────");
        println!("  Mode:          {} ({}x)", self.config.mode, r.leverage);
        println!("  Modal:         {}", rupiah(r.modal));
        println!("  Effective:     {}", rupiah(r.effective_capital));
        println!("  Position Size: {:.4}", r.position_size);
        println!("  Distribution:  {}", self.config.distribution.label());
        println!();
        println!("  TAKE PROFIT");
        println!("  ───────────────────────────────────");
        for row in &r.target_rows {
            println!(
                "  TP{:<2} {:>10.4} {:>+7.2}% | {:>5.1}% pos | {:>14.4} units | {:>16} | cum {:>16} ({:+.2}%)",
                row.level,
                row.target_price,
                row.percentage_from_entry,
                row.allocation_pct,
                row.units,
                rupiah(row.profit),
                rupiah(row.cumulative_profit),
                row.cumulative_roi_percent
            );
        }

        if !r.stop_loss_rows.is_empty() {
            println!();
            println!("  STOP LOSS");
            println!("  ───────────────────────────────────");
            for sl in &r.stop_loss_rows {
                println!(
                    "  SL{:<2} {:>10.4} {:>+7.2}% | {:>16} ({:.2}%)",
                    sl.level,
                    sl.price,
                    sl.percentage_from_entry,
                    rupiah(sl.loss),
                    sl.loss_percent
                );
            }
        }

        println!();
        println!("  SUMMARY");
        println!("  ───────────────────────────────────");
        println!(
            "  Total (All TP): {} ({:+.2}%)",
            rupiah(r.total_profit),
            r.roi_percent
        );
        if let (Some(p), Some(roi)) = (r.partial_profit, r.partial_roi_percent) {
            println!("  TP1 & TP2:      {} ({:+.2}%)", rupiah(p), roi);
        }
        println!("  Risk/Reward:    {}", risk_reward(r.risk_reward_ratio));
        println!("{}", "=".repeat(70));
    }
}
