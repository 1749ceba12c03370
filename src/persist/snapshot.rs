use crate::data::Data;
use crate::error::Result;

/// Serialize the full data map.
pub(crate) fn encode(data: &Data) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}

/// Parse a stored snapshot. Blank blobs decode to an empty map.
pub(crate) fn decode(blob: &str) -> Result<Data> {
    if blob.trim().is_empty() {
        return Ok(Data::new());
    }
    Ok(serde_json::from_str(blob)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Key, Value};
    use crate::error::StoreError;
    use serde_json::json;

    #[test]
    fn blank_blob_is_empty_map() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("  \n").unwrap().is_empty());
        assert!(decode("{}").unwrap().is_empty());
    }

    #[test]
    fn nested_values_survive() {
        let mut data = Data::new();
        data.insert(Key::from("user"), json!({"name": "ada", "tags": ["a", null]}));
        data.insert(Key::from(3), Value::Null);

        assert_eq!(decode(&encode(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn malformed_blob_is_snapshot_error() {
        assert!(matches!(decode("[1, 2]"), Err(StoreError::Snapshot(_))));
        assert!(matches!(decode("{not json"), Err(StoreError::Snapshot(_))));
    }
}
