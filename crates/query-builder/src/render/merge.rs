use crate::{
    ast::merge::{Merge, MergeMatched, MergeNotMatched},
    render::Render,
};

impl Render for Merge {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("MERGE ");
        r.render_table_ref(&self.target);
        r.sql.push_str(" WITH (HOLDLOCK) AS ");
        r.sql
            .push_str(&r.dialect.quote_identifier(&self.target_alias));

        r.sql.push_str(" USING (");
        self.source.render(r);
        r.sql.push_str(") AS ");
        r.sql
            .push_str(&r.dialect.quote_identifier(&self.source_alias));

        r.sql.push_str(" ON ");
        self.on.render(r);

        if let Some(matched) = &self.when_matched {
            r.sql.push(' ');
            matched.render(r);
        }

        if let Some(not_matched) = &self.when_not_matched {
            r.sql.push(' ');
            not_matched.render(r);
        }

        if self.delete_unmatched_by_source {
            r.sql.push_str(" WHEN NOT MATCHED BY SOURCE THEN DELETE");
        }

        r.sql.push(';');
    }
}

impl Render for MergeMatched {
    fn render(&self, r: &mut super::Renderer) {
        match self {
            MergeMatched::Update {
                assignments,
                predicate,
            } => {
                debug_assert!(!assignments.is_empty());

                r.sql.push_str("WHEN MATCHED");
                if let Some(predicate) = predicate {
                    r.sql.push_str(" AND ");
                    r.sql.push_str(predicate);
                }
                r.sql.push_str(" THEN UPDATE SET ");
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    assignment.render(r);
                }
            }
            MergeMatched::Delete => {
                r.sql.push_str("WHEN MATCHED THEN DELETE");
            }
        }
    }
}

impl Render for MergeNotMatched {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("WHEN NOT MATCHED THEN INSERT (");
        r.render_column_list(&self.columns);
        r.sql.push_str(") VALUES (");
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            value.render(r);
        }
        r.sql.push(')');
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{
            common::{Assignment, TableRef},
            expr::Expr,
            merge::{Merge, MergeMatched, MergeNotMatched},
            select::Select,
        },
        dialect::SqlServer,
        ident, qual_ident,
        render::{Render, Renderer},
    };
    use pretty_assertions::assert_eq;

    fn item_merge() -> Merge {
        Merge {
            target: TableRef::qualified("dbo", "Item"),
            target_alias: "T".to_string(),
            source: Select {
                columns: vec![ident("ItemId"), ident("Name")],
                from: TableRef::qualified("dbo", "ItemTemp1234"),
                row_limit: None,
            },
            source_alias: "S".to_string(),
            on: Expr::eq(qual_ident("T", "ItemId"), qual_ident("S", "ItemId")),
            when_matched: Some(MergeMatched::Update {
                assignments: vec![Assignment {
                    target: qual_ident("T", "Name"),
                    value: qual_ident("S", "Name"),
                }],
                predicate: None,
            }),
            when_not_matched: Some(MergeNotMatched {
                columns: vec!["ItemId".to_string(), "Name".to_string()],
                values: vec![qual_ident("S", "ItemId"), qual_ident("S", "Name")],
            }),
            delete_unmatched_by_source: false,
        }
    }

    #[test]
    fn test_render_merge_upsert() {
        let mut r = Renderer::new(&SqlServer);
        item_merge().render(&mut r);
        assert_eq!(
            r.finish(),
            concat!(
                "MERGE [dbo].[Item] WITH (HOLDLOCK) AS [T] ",
                "USING (SELECT [ItemId], [Name] FROM [dbo].[ItemTemp1234]) AS [S] ",
                "ON [T].[ItemId] = [S].[ItemId] ",
                "WHEN MATCHED THEN UPDATE SET [T].[Name] = [S].[Name] ",
                "WHEN NOT MATCHED THEN INSERT ([ItemId], [Name]) VALUES ([S].[ItemId], [S].[Name]);"
            )
        );
    }

    #[test]
    fn test_render_merge_top_on_source() {
        let mut ast = item_merge();
        ast.source.row_limit = Some(5);
        let mut r = Renderer::new(&SqlServer);
        ast.render(&mut r);
        assert!(r
            .finish()
            .contains("USING (SELECT TOP(5) [ItemId], [Name] FROM [dbo].[ItemTemp1234])"));
    }

    #[test]
    fn test_render_merge_delete_unmatched_by_source() {
        let mut ast = item_merge();
        ast.delete_unmatched_by_source = true;
        let mut r = Renderer::new(&SqlServer);
        ast.render(&mut r);
        let sql = r.finish();
        assert!(sql.ends_with("WHEN NOT MATCHED BY SOURCE THEN DELETE;"));
    }
}
