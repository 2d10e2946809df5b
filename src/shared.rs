pub mod types;
pub mod settings;
pub mod error;


pub use error::{AppError, AppResult};
