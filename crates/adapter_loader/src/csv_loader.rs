//! CSV trade source.
//!
//! Reads a header row followed by one trade per row. Column order is free
//! and extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pricer_core::trade::RawTradeRecord;
use tracing::{debug, info};

use crate::error::LoaderError;

/// Loads [`RawTradeRecord`]s from CSV.
///
/// Every field is trimmed. `NotionalCurrency` and `OptionType` are
/// upper-cased; all other text is kept as written.
///
/// # Examples
///
/// ```
/// use adapter_loader::CsvTradeLoader;
///
/// let data = "\
/// TradeID,Underlying,Notional,NotionalCurrency,Spot,Strike,Vol,RateDomestic,RateForeign,Expiry,OptionType
/// T001, EUR/USD ,1000000,usd,1.10,1.12,0.10,0.05,0.03,0.5,call
/// ";
///
/// let records = CsvTradeLoader::new().load_reader(data.as_bytes()).unwrap();
/// assert_eq!(records[0].underlying, "EUR/USD");
/// assert_eq!(records[0].notional_currency, "USD");
/// assert_eq!(records[0].option_type, "CALL");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTradeLoader;

impl CsvTradeLoader {
    /// Creates a comma-delimited loader.
    pub fn new() -> Self {
        Self
    }

    /// Loads every record from the file at `path`.
    ///
    /// # Errors
    ///
    /// - `LoaderError::FileNotFound` if `path` does not exist
    /// - `LoaderError::MissingColumns` if the header lacks a required column
    /// - `LoaderError::Row` for the first row that cannot be parsed
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<RawTradeRecord>, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(csv::Error::from)?;
        let records = self.load_reader(file)?;
        info!(path = %path.display(), trades = records.len(), "Loaded trades");
        Ok(records)
    }

    /// Loads every record from `reader`.
    ///
    /// # Errors
    ///
    /// As [`load_path`](Self::load_path), minus the file check.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<RawTradeRecord>, LoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        check_columns(csv_reader.headers()?)?;

        csv_reader
            .deserialize::<RawTradeRecord>()
            .enumerate()
            .map(|(idx, result)| {
                let record = result.map_err(|err| LoaderError::Row {
                    row: err.position().map_or(idx as u64 + 2, |pos| pos.line()),
                    message: row_message(&err),
                })?;
                debug!(record = idx + 1, trade_id = %record.trade_id, "Parsed row");
                Ok(normalise(record))
            })
            .collect()
    }
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), LoaderError> {
    let missing: Vec<String> = RawTradeRecord::COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoaderError::MissingColumns {
            missing,
            required: RawTradeRecord::COLUMNS.iter().map(|c| c.to_string()).collect(),
        })
    }
}

fn row_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => match err.field() {
            Some(field) => format!("field {}: {}", field + 1, err.kind()),
            None => err.kind().to_string(),
        },
        _ => err.to_string(),
    }
}

fn normalise(mut record: RawTradeRecord) -> RawTradeRecord {
    record.notional_currency = record.notional_currency.to_uppercase();
    record.option_type = record.option_type.to_uppercase();
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "TradeID,Underlying,Notional,NotionalCurrency,Spot,Strike,Vol,RateDomestic,RateForeign,Expiry,OptionType";

    #[test]
    fn test_load_two_rows() {
        let data = format!(
            "{HEADER}\nT1,EUR/USD,1000000,USD,1.1,1.1,0.1,0.05,0.03,0.5,Call\n\
             T2,USDJPY,5e8,jpy,110,112,0.09,0.001,0.02,1,put\n"
        );
        let records = CsvTradeLoader::new().load_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].trade_id, "T1");
        assert_eq!(records[0].notional, 1_000_000.0);
        assert_eq!(records[1].notional, 5e8);
        assert_eq!(records[1].notional_currency, "JPY");
        assert_eq!(records[1].option_type, "PUT");
        assert_eq!(records[1].expiry_years, 1.0);
    }

    #[test]
    fn test_column_order_free_and_extra_columns_ignored() {
        let data = "OptionType,Comment,TradeID,Underlying,Notional,NotionalCurrency,Spot,Strike,Vol,RateDomestic,RateForeign,Expiry\n\
                    CALL,hedge,X1,GBP/USD,250000,USD,1.27,1.3,0.08,0.05,0.04,0.25\n";
        let records = CsvTradeLoader::new().load_reader(data.as_bytes()).unwrap();
        assert_eq!(records[0].trade_id, "X1");
        assert_eq!(records[0].strike, 1.3);
    }

    #[test]
    fn test_missing_columns_listed() {
        let data = "TradeID,Underlying,Notional,NotionalCurrency,Spot,Strike,RateDomestic,RateForeign,OptionType\n";
        let err = CsvTradeLoader::new().load_reader(data.as_bytes()).unwrap_err();
        match err {
            LoaderError::MissingColumns { missing, required } => {
                assert_eq!(missing, vec!["Vol".to_string(), "Expiry".to_string()]);
                assert_eq!(required.len(), 11);
            }
            other => panic!("Expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_row_reports_sheet_row() {
        let data = format!(
            "{HEADER}\nT1,EUR/USD,1000000,USD,1.1,1.1,0.1,0.05,0.03,0.5,Call\n\
             T2,EUR/USD,lots,USD,1.1,1.1,0.1,0.05,0.03,0.5,Call\n"
        );
        let err = CsvTradeLoader::new().load_reader(data.as_bytes()).unwrap_err();
        match err {
            LoaderError::Row { row, message } => {
                assert_eq!(row, 3);
                assert!(message.contains("float"), "message: {message}");
            }
            other => panic!("Expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn test_row_locator_counts_skipped_blank_lines() {
        let data = format!(
            "{HEADER}\nT1,EUR/USD,1000000,USD,1.1,1.1,0.1,0.05,0.03,0.5,Call\n\n\
             T2,EUR/USD,1000000,USD,1.1,1.1,abc,0.05,0.03,0.5,Call\n"
        );
        let err = CsvTradeLoader::new().load_reader(data.as_bytes()).unwrap_err();
        match err {
            LoaderError::Row { row, .. } => assert_eq!(row, 4),
            other => panic!("Expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = CsvTradeLoader::new().load_reader(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}
