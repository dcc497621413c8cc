use crate::{
    ast::{drop_table::DropTable, staging::CloneTable},
    dialect::CloneStyle,
    render::Render,
};

impl Render for CloneTable {
    fn render(&self, r: &mut super::Renderer) {
        match r.dialect.clone_style() {
            CloneStyle::SelectInto => {
                r.sql.push_str("SELECT ");
                r.render_column_list(&self.columns);
                r.sql.push_str(" INTO ");
                r.render_table_ref(&self.target);
                r.sql.push_str(" FROM ");
                r.render_table_ref(&self.source);
                r.sql.push_str(" WHERE 1 = 0");
            }
            CloneStyle::CreateTableAs => {
                r.sql.push_str("CREATE TABLE ");
                r.render_table_ref(&self.target);
                r.sql.push_str(" AS SELECT ");
                r.render_column_list(&self.columns);
                r.sql.push_str(" FROM ");
                r.render_table_ref(&self.source);
                r.sql.push_str(" WHERE 1 = 0");
            }
            CloneStyle::Like => {
                r.sql.push_str("CREATE TABLE ");
                r.render_table_ref(&self.target);
                r.sql.push_str(" LIKE ");
                r.render_table_ref(&self.source);
            }
        }
        r.sql.push(';');
    }
}

impl Render for DropTable {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("DROP TABLE ");
        if self.if_exists {
            r.sql.push_str("IF EXISTS ");
        }
        r.render_table_ref(&self.table);
        r.sql.push(';');
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{common::TableRef, drop_table::DropTable, staging::CloneTable},
        dialect::{MySql, Postgres, SqlServer},
        render::{Render, Renderer},
    };
    use pretty_assertions::assert_eq;

    fn clone_table() -> CloneTable {
        CloneTable {
            source: TableRef::qualified("dbo", "Item"),
            target: TableRef::qualified("dbo", "ItemTemp1234"),
            columns: vec!["ItemId".to_string(), "Name".to_string()],
        }
    }

    #[test]
    fn test_render_clone_select_into() {
        let mut r = Renderer::new(&SqlServer);
        clone_table().render(&mut r);
        assert_eq!(
            r.finish(),
            "SELECT [ItemId], [Name] INTO [dbo].[ItemTemp1234] FROM [dbo].[Item] WHERE 1 = 0;"
        );
    }

    #[test]
    fn test_render_clone_create_table_as() {
        let mut r = Renderer::new(&Postgres);
        clone_table().render(&mut r);
        assert_eq!(
            r.finish(),
            r#"CREATE TABLE "dbo"."ItemTemp1234" AS SELECT "ItemId", "Name" FROM "dbo"."Item" WHERE 1 = 0;"#
        );
    }

    #[test]
    fn test_render_clone_like() {
        let mut r = Renderer::new(&MySql);
        clone_table().render(&mut r);
        assert_eq!(
            r.finish(),
            "CREATE TABLE `dbo`.`ItemTemp1234` LIKE `dbo`.`Item`;"
        );
    }

    #[test]
    fn test_render_drop_table() {
        let ast = DropTable {
            table: TableRef::qualified("dbo", "ItemTemp1234"),
            if_exists: true,
        };
        let mut r = Renderer::new(&Postgres);
        ast.render(&mut r);
        assert_eq!(r.finish(), r#"DROP TABLE IF EXISTS "dbo"."ItemTemp1234";"#);
    }
}
