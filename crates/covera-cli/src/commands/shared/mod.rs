pub mod knowledge;
pub mod parse;
