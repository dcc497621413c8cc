pub mod table_info;

pub use table_info::{OperationType, TableInfo, UpdatePredicate};
