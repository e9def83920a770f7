pub mod error;
pub mod forms;
pub mod incident;
pub mod list;
pub mod session;
