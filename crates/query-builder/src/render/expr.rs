use crate::{
    ast::{
        common::Assignment,
        expr::{BinaryOp, BinaryOperator, ColumnRef, Expr, Ident},
    },
    render::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Column(col) => col.render(r),
            Expr::Excluded(column) => {
                let text = r.dialect.excluded_column(column);
                r.sql.push_str(&text);
            }
            Expr::Literal(text) => r.sql.push_str(text),
            Expr::BinaryOp(op) => op.render(r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for ColumnRef {
    fn render(&self, r: &mut Renderer) {
        r.render_table_ref(&self.table);
        r.sql.push('.');
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        // Builders only produce flat Eq/And conjunctions, so no
        // parentheses are needed to preserve precedence.
        self.left.render(r);

        let op_str = match self.op {
            BinaryOperator::Eq => " = ",
            BinaryOperator::NotEq => " <> ",
            BinaryOperator::Lt => " < ",
            BinaryOperator::LtEq => " <= ",
            BinaryOperator::Gt => " > ",
            BinaryOperator::GtEq => " >= ",
            BinaryOperator::And => " AND ",
            BinaryOperator::Or => " OR ",
            BinaryOperator::Concat => "",
        };
        if self.op == BinaryOperator::Concat {
            r.sql.push(' ');
            r.sql.push_str(r.dialect.concat_operator());
            r.sql.push(' ');
        } else {
            r.sql.push_str(op_str);
        }

        self.right.render(r);
    }
}

impl Render for Assignment {
    fn render(&self, r: &mut Renderer) {
        self.target.render(r);
        r.sql.push_str(" = ");
        self.value.render(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::common::TableRef,
        dialect::{MySql, Postgres, SqlServer},
    };

    fn render(expr: &Expr, dialect: &dyn crate::dialect::Dialect) -> String {
        let mut r = Renderer::new(dialect);
        expr.render(&mut r);
        r.finish()
    }

    #[test]
    fn test_render_qualified_column() {
        let expr = Expr::Column(ColumnRef {
            table: TableRef::qualified("dbo", "Item"),
            name: "ItemId".to_string(),
        });
        assert_eq!(render(&expr, &Postgres), r#""dbo"."Item"."ItemId""#);
        assert_eq!(render(&expr, &SqlServer), "[dbo].[Item].[ItemId]");
    }

    #[test]
    fn test_render_flat_conjunction_without_parens() {
        let expr = Expr::conjoin([
            Expr::eq(crate::ident("a"), crate::ident("b")),
            Expr::eq(crate::ident("c"), crate::ident("d")),
        ])
        .unwrap();
        assert_eq!(
            render(&expr, &Postgres),
            r#""a" = "b" AND "c" = "d""#
        );
    }

    #[test]
    fn test_render_concat_uses_dialect_operator() {
        let expr = Expr::BinaryOp(Box::new(BinaryOp {
            left: crate::ident("a"),
            op: BinaryOperator::Concat,
            right: crate::ident("b"),
        }));
        assert_eq!(render(&expr, &MySql), "`a` + `b`");
        assert_eq!(render(&expr, &Postgres), r#""a" || "b""#);
    }
}
