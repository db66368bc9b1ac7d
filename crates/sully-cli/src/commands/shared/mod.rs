pub mod assets;
pub mod limit;
pub mod parse;
