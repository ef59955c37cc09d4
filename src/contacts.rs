use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::error::GraphResult;

/// One entry of the contact-book export.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "phoneNumber")]
    pub phone: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "ziiname")]
    pub internal_name: String,
    #[serde(rename = "contactList")]
    pub contacts: Vec<String>,
}

pub fn read_records(path: impl AsRef<Path>) -> GraphResult<Vec<ContactRecord>> {
    let file = File::open(path.as_ref())?;
    let records = parse_records(BufReader::new(file))?;
    info!(
        path = %path.as_ref().display(),
        records = records.len(),
        "read contact records"
    );
    Ok(records)
}

pub fn parse_records<R: Read>(reader: R) -> GraphResult<Vec<ContactRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"phoneNumber": "111", "accountId": "a1", "displayName": "Ann",
             "ziiname": "ann", "contactList": ["222", "333", "333"]}
        ]"#;
        let records = parse_records(json.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].phone, "111");
        assert_eq!(records[0].account_id, "a1");
        assert_eq!(records[0].display_name, "Ann");
        assert_eq!(records[0].internal_name, "ann");
        assert_eq!(records[0].contacts, vec!["222", "333", "333"]);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"[{"phoneNumber": "111", "accountId": "a1", "displayName": "Ann"}]"#;
        assert!(matches!(
            parse_records(json.as_bytes()),
            Err(GraphError::Json(_))
        ));
    }

    #[test]
    fn test_non_array_document_is_rejected() {
        let json = r#"{"phoneNumber": "111"}"#;
        assert!(parse_records(json.as_bytes()).is_err());
    }

    #[test]
    fn test_numeric_phone_is_rejected() {
        let json = r#"[{"phoneNumber": 111, "accountId": "a1", "displayName": "Ann",
                        "ziiname": "ann", "contactList": []}]"#;
        assert!(parse_records(json.as_bytes()).is_err());
    }

    #[test]
    fn test_read_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_records(dir.path().join("absent.json"));
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
