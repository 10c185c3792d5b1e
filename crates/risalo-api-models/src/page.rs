//! Tolerant decoding for paginated listing envelopes.
//!
//! The content API grew across several backend generations and the listing
//! endpoints still answer with three envelope shapes: `{"items": [..]}`,
//! `{"rows": [..]}` and `{"<plural>": [..]}`, with the page count either at
//! the top level (`totalPages`) or nested under `pagination`. Decoding folds
//! all of them into one [`Page`] so controllers never branch on shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One normalised page of rows from a listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows for the requested page; rows that fail to decode are dropped.
    pub items: Vec<T>,
    /// Total row count across all pages.
    pub total: u64,
    /// Total page count; always at least 1.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Page with no rows, used before the first response lands.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 1,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Folds any of the known envelope shapes into a normalised page.
    ///
    /// Missing row arrays decode as empty, a missing `total` falls back to
    /// the row count, and a missing or zero page count becomes 1 so the
    /// pagination footer never divides by nothing.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let items: Vec<T> = rows_array(value)
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| serde_json::from_value(row.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();
        let total = value
            .get("total")
            .and_then(Value::as_u64)
            .unwrap_or_else(|| u64::try_from(items.len()).unwrap_or(u64::MAX));
        let total_pages = value
            .get("pagination")
            .and_then(|nested| nested.get("totalPages").or_else(|| nested.get("total_pages")))
            .or_else(|| value.get("totalPages"))
            .or_else(|| value.get("total_pages"))
            .and_then(Value::as_u64)
            .and_then(|count| u32::try_from(count).ok())
            .unwrap_or(1)
            .max(1);
        Self {
            items,
            total,
            total_pages,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Finds the row array inside an envelope: the well-known keys first, then
/// the first array-valued member, then a bare top-level array.
fn rows_array(value: &Value) -> Option<&Vec<Value>> {
    if let Some(rows) = value.as_array() {
        return Some(rows);
    }
    let object = value.as_object()?;
    for key in ["items", "rows", "data"] {
        if let Some(rows) = object.get(key).and_then(Value::as_array) {
            return Some(rows);
        }
    }
    object.values().find_map(Value::as_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoupletItem;

    #[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
    struct NamedRow {
        id: u64,
        name: String,
    }

    #[test]
    fn decodes_items_envelope_with_nested_count() {
        let page: Page<NamedRow> = serde_json::from_str(
            r#"{"items":[{"id":1,"name":"a"},{"id":2,"name":"b"}],"total":34,"pagination":{"totalPages":3}}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 34);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn decodes_rows_envelope_with_top_level_count() {
        let page: Page<NamedRow> = serde_json::from_str(
            r#"{"rows":[{"id":9,"name":"x"}],"total":1,"totalPages":1}"#,
        )
        .unwrap();
        assert_eq!(page.items[0].id, 9);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn decodes_entity_plural_envelope_without_counts() {
        let page: Page<NamedRow> = serde_json::from_str(
            r#"{"categories":[{"id":4,"name":"kafi"},{"id":5,"name":"vaai"}]}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn decodes_bare_array_body() {
        let page: Page<NamedRow> = serde_json::from_str(r#"[{"id":1,"name":"a"}]"#).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn drops_rows_that_fail_to_decode() {
        let page: Page<NamedRow> = serde_json::from_str(
            r#"{"items":[{"id":1,"name":"a"},{"id":"broken"},{"id":3,"name":"c"}],"total":3}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, 3);
    }

    #[test]
    fn empty_object_decodes_as_empty_page() {
        let page: Page<NamedRow> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_page_count_clamps_to_one() {
        let page: Page<NamedRow> =
            serde_json::from_str(r#"{"items":[],"total":0,"pagination":{"totalPages":0}}"#).unwrap();
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn decodes_couplet_rows_with_sparse_fields() {
        let page: Page<CoupletItem> = serde_json::from_str(
            r#"{"couplets":[{"id":11,"sindhi_text":"سدا آهين سپرين"}],"total":120,"pagination":{"totalPages":10}}"#,
        )
        .unwrap();
        assert_eq!(page.items[0].id, 11);
        assert_eq!(page.items[0].likes, 0);
        assert!(page.items[0].roman_text.is_none());
        assert_eq!(page.total_pages, 10);
    }
}
