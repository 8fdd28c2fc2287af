pub mod attribution;
pub mod blend;
pub mod placement;
pub mod render;
pub mod style;
