use anyhow::Result;

use super::ScenarioReport;

impl ScenarioReport {
    /// One header row plus one data row. Column set grows with the number of
    /// targets and stop-losses.
    pub fn csv_columns(&self) -> Vec<(String, String)> {
        let signal = &self.signal;
        let result = &self.result;

        let mut cols = vec![
            ("Symbol".to_string(), signal.symbol.clone().unwrap_or_default()),
            (
                "Risk Level".to_string(),
                signal.risk_level.clone().unwrap_or_default(),
            ),
            ("Trading Mode".to_string(), self.config.mode.to_string()),
            ("Modal".to_string(), self.config.modal.to_string()),
            ("Leverage".to_string(), self.config.leverage.to_string()),
            ("Entry Price".to_string(), result.entry.to_string()),
            ("Position Size".to_string(), result.position_size.to_string()),
            ("Total Profit".to_string(), result.total_profit.to_string()),
            ("ROI %".to_string(), result.roi_percent.to_string()),
        ];

        for (i, row) in result.target_rows.iter().enumerate() {
            let n = i + 1;
            cols.push((format!("TP{n} Price"), row.target_price.to_string()));
            cols.push((format!("TP{n} %"), row.allocation_pct.to_string()));
            cols.push((format!("TP{n} Profit"), row.profit.to_string()));
        }

        for sl in &result.stop_loss_rows {
            cols.push((format!("SL{} Price", sl.level), sl.price.to_string()));
            cols.push((format!("SL{} Loss", sl.level), sl.loss.to_string()));
        }

        cols
    }

    pub fn to_csv(&self) -> Result<String> {
        let cols = self.csv_columns();
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(cols.iter().map(|(h, _)| h.as_str()))?;
        wtr.write_record(cols.iter().map(|(_, v)| v.as_str()))?;
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::sample_report;

    #[test]
    fn csv_has_header_and_one_row() {
        let csv = sample_report().to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Symbol,Risk Level,Trading Mode,Modal,Leverage"));
        assert!(lines[0].contains("TP4 Profit"));
        assert!(lines[0].ends_with("SL2 Price,SL2 Loss"));
        assert!(lines[1].starts_with("JELLYJELLYUSDT,"));
    }

    #[test]
    fn csv_reads_back_with_matching_widths() {
        let csv = sample_report().to_csv().unwrap();
        let mut rdr = csv::Reader::from_reader(csv.as_bytes());
        let headers = rdr.headers().unwrap().clone();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), headers.len());
        // 9 fixed columns, 3 per target, 2 per stop-loss
        assert_eq!(headers.len(), 9 + 4 * 3 + 2 * 2);
        assert_eq!(&records[0][2], "Spot");
    }
}
