mod repeated_style_message;
mod repeated_style_message_handler;

pub mod item_describer;

#[doc(inline)]
pub use repeated_style_message::RepeatedStyleMessage;
#[doc(inline)]
pub use repeated_style_message_handler::{RepeatedStyleMessageContext, RepeatedStyleMessageHandler};
