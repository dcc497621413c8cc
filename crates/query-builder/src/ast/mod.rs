pub mod common;
pub mod delete;
pub mod drop_table;
pub mod expr;
pub mod insert;
pub mod merge;
pub mod select;
pub mod staging;
pub mod update;
