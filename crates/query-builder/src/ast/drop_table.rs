use crate::ast::common::TableRef;

#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub table: TableRef,
    pub if_exists: bool,
}
