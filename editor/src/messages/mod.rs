//! The root-level messages forming the first layer of the message system architecture.

pub mod debug;
pub mod frontend;
pub mod message;
pub mod preferences;
pub mod prelude;
pub mod repeated_style;
