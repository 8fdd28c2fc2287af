pub mod layout;
pub mod wrap;
