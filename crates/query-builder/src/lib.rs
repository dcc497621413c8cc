use crate::ast::expr::{Expr, Ident};

pub mod ast;
pub mod build;
pub mod dialect;
pub mod macros;
pub mod params;
pub mod render;
pub mod rewrite;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qual_ident(qualifier: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    })
}
