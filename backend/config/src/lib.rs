pub mod schema;

pub use schema::RelayConfig;
