/*! Span list reading.

Span lists are either a JSON array of [SpanRecord]s or JSON Lines (one record per line).
The first non-whitespace character tells which.
!*/
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::io::SpanRecord;

/// Load every record of the span list at `path`.
pub fn read_span_list(path: &Path) -> Result<Vec<SpanRecord>, Error> {
    info!("reading span list {:?}", path);
    let f = File::open(path)?;
    let records = from_reader(BufReader::new(f))?;
    info!("{} records read from {:?}", records.len(), path);
    Ok(records)
}

/// Load every record of a span list.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<SpanRecord>, Error> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    from_str(&content)
}

/// Parse a span list, detecting JSON array and JSON Lines.
pub fn from_str(content: &str) -> Result<Vec<SpanRecord>, Error> {
    if content.trim_start().starts_with('[') {
        debug!("span list is a JSON array");
        Ok(serde_json::from_str(content)?)
    } else {
        debug!("span list is in JSON lines");
        serde_json::Deserializer::from_str(content)
            .into_iter::<SpanRecord>()
            .map(|record| record.map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::spans::Span;

    const ARRAY: &str = r#"[
  {"ita": "Il gatto dorme", "pms": "Ël gat ëd deurm", "split": "dev", "flores_id": 1,
   "spans_index": [[[0, 2], [0, 3]], [[3, 8], [3, 6]]]},
  {"ita": "Ciao", "pms": "Cerea", "split": "devtest", "flores_id": 2,
   "spans_index": [[[0, 4], [0, 5]]]}
]"#;

    const LINES: &str = r#"{"ita": "Il gatto dorme", "pms": "Ël gat ëd deurm", "split": "dev", "flores_id": 1, "spans_index": [[[0, 2], [0, 3]], [[3, 8], [3, 6]]]}
{"ita": "Ciao", "pms": "Cerea", "split": "devtest", "flores_id": 2, "spans_index": [[[0, 4], [0, 5]]]}
"#;

    #[test]
    fn array_and_lines_agree() {
        let from_array = from_str(ARRAY).unwrap();
        let from_lines = from_str(LINES).unwrap();
        assert_eq!(from_array.len(), 2);
        assert_eq!(from_array, from_lines);
        assert_eq!(
            from_array[0].span_char_ranges[1],
            Span::new((3, 8), (3, 6))
        );
        assert_eq!(from_array[1].split_label.as_deref(), Some("devtest"));
    }

    #[test]
    fn empty() {
        assert!(from_str("").unwrap().is_empty());
        assert!(from_str("  []  ").unwrap().is_empty());
    }

    #[test]
    fn invalid() {
        assert!(matches!(from_str("[{\"ita\": 3}]"), Err(Error::Serde(_))));
        assert!(matches!(from_str("{\"ita\": \"a\"}"), Err(Error::Serde(_))));
    }

    #[test]
    fn from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(LINES.as_bytes()).unwrap();
        let records = read_span_list(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, Some(2));
    }

    #[test]
    fn missing_file() {
        let dst = tempfile::tempdir().unwrap();
        let err = read_span_list(&dst.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
