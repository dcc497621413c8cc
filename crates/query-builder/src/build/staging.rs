//! Staging-table lifecycle statements shared by all operations:
//! create the staging clone, drop it, and the plain copy back into
//! the target table.

use crate::{
    ast::{drop_table::DropTable, insert::Insert, select::Select, staging::CloneTable},
    build::{staging_ref, target_ref},
    dialect::dialect_for,
    ident,
    render::{Render, Renderer},
};
use model::{
    core::data_type::SqlDialect,
    errors::SqlGenError,
    schema::{OperationType, TableInfo},
};

/// `CREATE`-equivalent for the staging table, mirroring the target's
/// column set without copying rows.
pub fn create_staging_table(info: &TableInfo, dialect: SqlDialect) -> Result<String, SqlGenError> {
    info.validate(OperationType::Insert)?;
    let ast = CloneTable {
        source: target_ref(info),
        target: staging_ref(info),
        columns: info.column_names().iter().map(|c| c.to_string()).collect(),
    };
    let mut r = Renderer::new(dialect_for(dialect));
    ast.render(&mut r);
    Ok(r.finish())
}

pub fn drop_staging_table(info: &TableInfo, dialect: SqlDialect, if_exists: bool) -> String {
    let ast = DropTable {
        table: staging_ref(info),
        if_exists,
    };
    let mut r = Renderer::new(dialect_for(dialect));
    ast.render(&mut r);
    r.finish()
}

/// Plain copy of all staged rows into the target table. The column list
/// follows the mapping iteration order exactly; callers bind parameters
/// positionally against it.
pub fn insert_from_staging(info: &TableInfo, dialect: SqlDialect) -> Result<String, SqlGenError> {
    info.validate(OperationType::Insert)?;
    let columns: Vec<String> = info.column_names().iter().map(|c| c.to_string()).collect();
    let ast = Insert {
        table: target_ref(info),
        columns: columns.clone(),
        select: Select {
            columns: columns.iter().map(|c| ident(c)).collect(),
            from: staging_ref(info),
            row_limit: None,
        },
        wrap_select: false,
        conflict: None,
        ignore: false,
    };
    let mut r = Renderer::new(dialect_for(dialect));
    ast.render(&mut r);
    Ok(r.finish())
}
