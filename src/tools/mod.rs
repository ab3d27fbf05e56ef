pub mod adapters;
pub mod definition;
pub mod executor;
pub mod schema;
