pub mod data_type;
pub mod param;
pub mod value;
