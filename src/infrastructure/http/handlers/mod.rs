//! HTTP Handlers

mod catalog;
mod favorite;
mod index;
mod user;

pub use catalog::*;
pub use favorite::*;
pub use index::*;
pub use user::*;
