use crate::{
    ast::update::{Update, UpdateSource},
    render::Render,
};

impl Render for Update {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("UPDATE ");
        r.render_table_ref(&self.table);

        // MySQL brings the source in before SET.
        if let Some(UpdateSource::Join { table, on }) = &self.source {
            r.sql.push_str(" INNER JOIN ");
            r.render_table_ref(table);
            r.sql.push_str(" ON ");
            on.render(r);
        }

        r.sql.push_str(" SET ");
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            assignment.render(r);
        }

        if let Some(UpdateSource::From(table)) = &self.source {
            r.sql.push_str(" FROM ");
            r.render_table_ref(table);
        }

        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }
        r.sql.push(';');
    }
}
