//! Data models for Fitlink

mod booking;
mod message;
mod plan;
mod subscription;
mod user;

pub use booking::*;
pub use message::*;
pub use plan::*;
pub use subscription::*;
pub use user::*;
