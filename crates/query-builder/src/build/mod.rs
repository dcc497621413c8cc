use crate::ast::common::TableRef;
use model::schema::TableInfo;

pub mod staging;
pub mod upsert;

pub(crate) fn target_ref(info: &TableInfo) -> TableRef {
    TableRef::qualified(&info.schema, &info.table)
}

pub(crate) fn staging_ref(info: &TableInfo) -> TableRef {
    TableRef::qualified(&info.schema, &info.staging_table)
}
