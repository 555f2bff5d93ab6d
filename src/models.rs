use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Earliest year the transcript provider has data for.
pub const FIRST_TRANSCRIPT_YEAR: i32 = 2000;

/// Identifies one transcript: one API call, one archive file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptKey {
    pub ticker: String,
    pub year: i32,
    pub quarter: u32,
}

impl TranscriptKey {
    pub fn new(ticker: &str, year: i32, quarter: u32) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            year,
            quarter,
        }
    }

    /// Archive file name for this key, e.g. `AAPL_2023_Q4.json`.
    pub fn file_name(&self) -> String {
        format!("{}_{}_Q{}.json", self.ticker, self.year, self.quarter)
    }
}

impl fmt::Display for TranscriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} Q{}", self.ticker, self.year, self.quarter)
    }
}

/// Calendar quarter for a 1-based month.
pub fn quarter_of_month(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

/// All keys to attempt for `ticker`: every quarter of every year from
/// [`FIRST_TRANSCRIPT_YEAR`] up to `current_year`, capped at
/// `current_quarter` for the final year. Ascending year, then quarter.
pub fn enumerate_keys(ticker: &str, current_year: i32, current_quarter: u32) -> Vec<TranscriptKey> {
    let mut keys = Vec::new();
    for year in FIRST_TRANSCRIPT_YEAR..=current_year {
        let max_quarter = if year < current_year { 4 } else { current_quarter };
        for quarter in 1..=max_quarter {
            keys.push(TranscriptKey::new(ticker, year, quarter));
        }
    }
    keys
}

/// The provider answers with an empty value (`null`, `[]`, `{}`) when no
/// transcript was published for a quarter; such documents are never archived.
pub fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quarter_of_month() {
        assert_eq!(quarter_of_month(1), 1);
        assert_eq!(quarter_of_month(3), 1);
        assert_eq!(quarter_of_month(4), 2);
        assert_eq!(quarter_of_month(5), 2);
        assert_eq!(quarter_of_month(6), 2);
        assert_eq!(quarter_of_month(7), 3);
        assert_eq!(quarter_of_month(9), 3);
        assert_eq!(quarter_of_month(10), 4);
        assert_eq!(quarter_of_month(12), 4);
    }

    #[test]
    fn test_enumerate_keys_caps_current_year() {
        // 2024-05-15 falls in Q2
        let keys = enumerate_keys("MSFT", 2024, 2);

        assert_eq!(keys.len(), 24 * 4 + 2);
        assert_eq!(keys.first().unwrap(), &TranscriptKey::new("MSFT", 2000, 1));
        assert_eq!(keys.last().unwrap(), &TranscriptKey::new("MSFT", 2024, 2));
        assert!(!keys.contains(&TranscriptKey::new("MSFT", 2024, 3)));
        assert!(!keys.contains(&TranscriptKey::new("MSFT", 2024, 4)));

        // every earlier year carries all four quarters
        for year in 2000..2024 {
            for quarter in 1..=4 {
                assert!(keys.contains(&TranscriptKey::new("MSFT", year, quarter)));
            }
        }
    }

    #[test]
    fn test_enumerate_keys_ascending_order() {
        let keys = enumerate_keys("AAPL", 2025, 3);
        for pair in keys.windows(2) {
            assert!((pair[0].year, pair[0].quarter) < (pair[1].year, pair[1].quarter));
        }
    }

    #[test]
    fn test_file_name_format() {
        let key = TranscriptKey::new("aapl", 2023, 4);
        assert_eq!(key.file_name(), "AAPL_2023_Q4.json");
    }

    #[test]
    fn test_empty_document_detection() {
        assert!(is_empty_document(&json!(null)));
        assert!(is_empty_document(&json!([])));
        assert!(is_empty_document(&json!({})));
        assert!(!is_empty_document(&json!({"transcript": "..."})));
        assert!(!is_empty_document(&json!(["speaker"])));
        assert!(!is_empty_document(&json!("text")));
    }
}
