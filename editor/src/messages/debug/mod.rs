mod debug_message;
mod debug_message_handler;

pub mod utility_types;

#[doc(inline)]
pub use debug_message::DebugMessage;
#[doc(inline)]
pub use debug_message_handler::DebugMessageHandler;
