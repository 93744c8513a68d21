use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, strum::IntoStaticStr)]
pub enum Message {
	NoOp,
	Batched { messages: Box<[Message]> },

	Debug(DebugMessage),
	Frontend(FrontendMessage),
	Preferences(PreferencesMessage),
	RepeatedStyle(RepeatedStyleMessage),
}

impl Message {
	/// The variant path of the message, such as `RepeatedStyle::Sort`, used when logging message names.
	pub fn name(&self) -> String {
		let parent: &'static str = self.into();
		let child: Option<&'static str> = match self {
			Message::NoOp | Message::Batched { .. } => None,
			Message::Debug(message) => Some(message.into()),
			Message::Frontend(message) => Some(message.into()),
			Message::Preferences(message) => Some(message.into()),
			Message::RepeatedStyle(message) => Some(message.into()),
		};

		match child {
			Some(child) => format!("{parent}::{child}"),
			None => parent.to_string(),
		}
	}

	/// Messages which only recompute what the frontend shows, so running the last of several queued copies is sufficient.
	pub fn is_side_effect_free(&self) -> bool {
		matches!(self, Message::RepeatedStyle(RepeatedStyleMessage::Refresh))
	}
}

macro_rules! child_message {
	($child:ty, $variant:ident) => {
		impl From<$child> for Message {
			fn from(message: $child) -> Self {
				Message::$variant(message)
			}
		}
	};
}

child_message!(DebugMessage, Debug);
child_message!(FrontendMessage, Frontend);
child_message!(PreferencesMessage, Preferences);
child_message!(RepeatedStyleMessage, RepeatedStyle);
