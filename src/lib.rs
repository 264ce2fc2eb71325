pub mod calc;
pub mod cli;
pub mod models;
pub mod store;

pub use store::{ContactBook, TaskList};
