//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod catalog_commands;
mod favorite_commands;

pub mod handlers;

pub use catalog_commands::*;
pub use favorite_commands::*;
