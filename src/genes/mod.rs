pub mod domains;
pub mod schema;

pub use domains::GeneDomainTable;
pub use schema::ModelVariant;
