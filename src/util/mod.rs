pub mod env;
pub mod extractor;
