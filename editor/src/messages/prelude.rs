// Message-related
pub use crate::utility_traits::MessageHandler;

// Message, MessageData and MessageHandler
pub use crate::messages::debug::{DebugMessage, DebugMessageHandler};
pub use crate::messages::frontend::FrontendMessage;
pub use crate::messages::message::Message;
pub use crate::messages::preferences::{PreferencesMessage, PreferencesMessageHandler};
pub use crate::messages::repeated_style::{RepeatedStyleMessage, RepeatedStyleMessageContext, RepeatedStyleMessageHandler};

// Style object model
pub use style_object_model::{LayerEdit, StyleDeclarationGroup, StyleProperty, StyleSheet, StyleStore};

// Use these by default
pub use std::collections::VecDeque;
