//! Query Handlers 实现

mod catalog_handlers;
mod user_handlers;

pub use catalog_handlers::*;
pub use user_handlers::*;
