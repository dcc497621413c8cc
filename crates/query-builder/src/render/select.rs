use crate::{
    ast::select::Select,
    dialect::LimitStyle,
    render::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");

        if let (Some(n), LimitStyle::Top) = (self.row_limit, r.dialect.limit_style()) {
            r.sql.push_str(&format!("TOP({n}) "));
        }

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        r.sql.push_str(" FROM ");
        r.render_table_ref(&self.from);

        if let (Some(n), LimitStyle::Limit) = (self.row_limit, r.dialect.limit_style()) {
            r.sql.push_str(&format!(" LIMIT {n}"));
        }
    }
}
