pub mod prediction;
pub mod schema;
