use crate::{
    ast::insert::{ConflictAction, ConflictClause, Insert},
    render::Render,
};

impl Render for Insert {
    fn render(&self, r: &mut super::Renderer) {
        r.sql.push_str("INSERT ");
        if self.ignore {
            r.sql.push_str("IGNORE ");
        }
        r.sql.push_str("INTO ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");
        r.render_column_list(&self.columns);
        r.sql.push(')');

        r.sql.push(' ');
        if self.wrap_select {
            r.sql.push('(');
            self.select.render(r);
            r.sql.push(')');
        } else {
            self.select.render(r);
        }

        if let Some(conflict) = &self.conflict {
            conflict.render(r);
        }
        r.sql.push(';');
    }
}

impl Render for ConflictClause {
    fn render(&self, r: &mut super::Renderer) {
        match self {
            ConflictClause::OnConflict { columns, action } => {
                r.sql.push_str(" ON CONFLICT (");
                r.render_column_list(columns);
                r.sql.push(')');
                action.render(r);
            }
            ConflictClause::OnDuplicateKey { assignments } => {
                r.sql.push_str(" ON DUPLICATE KEY UPDATE ");
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    assignment.render(r);
                }
            }
        }
    }
}

impl Render for ConflictAction {
    fn render(&self, r: &mut super::Renderer) {
        match self {
            ConflictAction::DoNothing => r.sql.push_str(" DO NOTHING"),
            ConflictAction::DoUpdate {
                assignments,
                predicate,
            } => {
                // An empty update set must never emit a zero-assignment
                // SET clause; the builder switches to DoNothing first.
                debug_assert!(!assignments.is_empty());

                r.sql.push_str(" DO UPDATE SET ");
                for (i, assignment) in assignments.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    assignment.render(r);
                }
                if let Some(predicate) = predicate {
                    r.sql.push_str(" WHERE ");
                    r.sql.push_str(predicate);
                }
            }
        }
    }
}
