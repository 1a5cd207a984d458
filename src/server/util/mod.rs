pub mod json;
pub mod parse;
