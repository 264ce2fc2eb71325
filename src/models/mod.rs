pub mod contact;
pub mod task;

pub use contact::{is_valid_email, is_valid_phone, Contact};
pub use task::{Task, TaskStatus};
