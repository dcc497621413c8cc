use crate::{
    ast::delete::{Delete, DeleteSource},
    render::Render,
};

impl Render for Delete {
    fn render(&self, r: &mut super::Renderer) {
        match &self.source {
            DeleteSource::Using { table, on } => {
                r.sql.push_str("DELETE FROM ");
                r.render_table_ref(&self.table);
                r.sql.push_str(" USING ");
                r.render_table_ref(table);
                r.sql.push_str(" WHERE ");
                on.render(r);
            }
            DeleteSource::Join { table, on } => {
                r.sql.push_str("DELETE ");
                r.render_table_ref(&self.table);
                r.sql.push_str(" FROM ");
                r.render_table_ref(&self.table);
                r.sql.push_str(" INNER JOIN ");
                r.render_table_ref(table);
                r.sql.push_str(" ON ");
                on.render(r);
            }
            DeleteSource::Exists { table, on } => {
                r.sql.push_str("DELETE FROM ");
                r.render_table_ref(&self.table);
                r.sql.push_str(" WHERE EXISTS (SELECT 1 FROM ");
                r.render_table_ref(table);
                r.sql.push_str(" WHERE ");
                on.render(r);
                r.sql.push(')');
            }
        }
        r.sql.push(';');
    }
}
