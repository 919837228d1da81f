pub mod identifier;
pub mod table;
pub mod values;
