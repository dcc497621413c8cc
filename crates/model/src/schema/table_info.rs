use crate::errors::SqlGenError;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// The SQL shape the statement generator emits for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    Insert,
    Update,
    InsertOrUpdate,
    InsertOrUpdateOrDelete,
    Delete,
}

impl OperationType {
    /// Operations that match staged rows against existing ones by key.
    pub fn requires_keys(&self) -> bool {
        !matches!(self, OperationType::Insert)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A caller-supplied condition template for the update branch of an
/// upsert. Invoked with the existing-row alias and the conflicting-row
/// alias; the returned text is spliced into the statement verbatim.
pub type UpdatePredicate = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Logical description of one target table and its staging table, as
/// supplied by the metadata layer. Immutable for the duration of a
/// single generation call.
///
/// Column mappings are ordered property-name -> column-name pairs;
/// iteration order is load-bearing, since callers bind parameters
/// positionally against the generated column lists.
#[derive(Clone, Default)]
pub struct TableInfo {
    pub schema: String,
    pub table: String,
    pub staging_table: String,
    pub staging_suffix: String,
    /// All columns of the table.
    pub columns: Vec<(String, String)>,
    /// Columns used to match staged rows against existing ones.
    pub compare_columns: Vec<(String, String)>,
    /// Columns assigned on the update branch of an upsert.
    pub update_columns: Vec<(String, String)>,
    /// Primary/identity key column names. Must be non-empty for every
    /// operation except plain Insert.
    pub key_columns: Vec<String>,
    pub update_predicate: Option<UpdatePredicate>,
}

impl TableInfo {
    /// Column names of the full set, in mapping order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(_, c)| c.as_str()).collect()
    }

    /// Column names of the update-on-conflict set, in mapping order.
    pub fn update_column_names(&self) -> Vec<&str> {
        self.update_columns.iter().map(|(_, c)| c.as_str()).collect()
    }

    /// Checks the invariants a generation call relies on.
    pub fn validate(&self, operation: OperationType) -> Result<(), SqlGenError> {
        if self.columns.is_empty() {
            return Err(SqlGenError::EmptyColumnSet {
                table: self.table.clone(),
            });
        }
        if operation.requires_keys() && self.key_columns.is_empty() {
            return Err(SqlGenError::MissingKeyColumns { operation });
        }
        Ok(())
    }
}

impl fmt::Debug for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableInfo")
            .field("schema", &self.schema)
            .field("table", &self.table)
            .field("staging_table", &self.staging_table)
            .field("staging_suffix", &self.staging_suffix)
            .field("columns", &self.columns)
            .field("compare_columns", &self.compare_columns)
            .field("update_columns", &self.update_columns)
            .field("key_columns", &self.key_columns)
            .field(
                "update_predicate",
                &self.update_predicate.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .map(|n| (n.to_string(), n.to_string()))
            .collect()
    }

    fn item_table() -> TableInfo {
        TableInfo {
            schema: "dbo".to_string(),
            table: "Item".to_string(),
            staging_table: "ItemTemp1234".to_string(),
            staging_suffix: "Temp1234".to_string(),
            columns: pairs(&["ItemId", "Name"]),
            compare_columns: pairs(&["ItemId"]),
            update_columns: pairs(&["Name"]),
            key_columns: vec!["ItemId".to_string()],
            update_predicate: None,
        }
    }

    #[test]
    fn test_validate_accepts_upsert_with_keys() {
        assert!(item_table().validate(OperationType::InsertOrUpdate).is_ok());
    }

    #[test]
    fn test_validate_rejects_update_without_keys() {
        let mut info = item_table();
        info.key_columns.clear();
        assert_eq!(
            info.validate(OperationType::Update),
            Err(SqlGenError::MissingKeyColumns {
                operation: OperationType::Update
            })
        );
    }

    #[test]
    fn test_validate_allows_insert_without_keys() {
        let mut info = item_table();
        info.key_columns.clear();
        assert!(info.validate(OperationType::Insert).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_column_set() {
        let mut info = item_table();
        info.columns.clear();
        assert_eq!(
            info.validate(OperationType::Insert),
            Err(SqlGenError::EmptyColumnSet {
                table: "Item".to_string()
            })
        );
    }
}
