pub mod app;
pub mod codec;
pub mod components;
pub mod schema;
pub mod store;
pub mod theme;
