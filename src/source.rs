pub mod client;
pub mod fetch;
pub mod model;
pub mod reddit;
