pub mod run;
pub mod select;
pub mod writer;
