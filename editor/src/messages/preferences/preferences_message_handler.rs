use crate::consts::{DEFAULT_MAX_LABEL_LENGTH, PREFERENCES_LOAD_FAILED_TITLE};
use crate::messages::debug::utility_types::MessageLoggingVerbosity;
use crate::messages::prelude::*;
use crate::EditorError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesMessageHandler {
	/// Labels in the layer list are cut short past this many characters. Zero disables truncation.
	pub max_label_length: usize,
	pub show_color_swatches: bool,
	pub message_logging_verbosity: MessageLoggingVerbosity,
}

impl Default for PreferencesMessageHandler {
	fn default() -> Self {
		Self {
			max_label_length: DEFAULT_MAX_LABEL_LENGTH,
			show_color_swatches: true,
			message_logging_verbosity: MessageLoggingVerbosity::default(),
		}
	}
}

impl PreferencesMessageHandler {
	/// Reads preferences from a JSON object. Missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, EditorError> {
		let invalid = |error: serde_json::Error| EditorError::InvalidPreferences(error.to_string());

		let document: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
		if !document.is_object() {
			return Err(EditorError::InvalidPreferences("expected a JSON object of preferences".into()));
		}
		serde_json::from_value(document).map_err(invalid)
	}

	fn apply(&mut self, preferences: Self, responses: &mut VecDeque<Message>) {
		*self = preferences;
		responses.push_back(DebugMessage::from(self.message_logging_verbosity).into());
		responses.push_back(RepeatedStyleMessage::Refresh.into());
	}
}

impl MessageHandler<PreferencesMessage, ()> for PreferencesMessageHandler {
	fn process_message(&mut self, message: PreferencesMessage, responses: &mut VecDeque<Message>, _data: ()) {
		match message {
			PreferencesMessage::Load { preferences } => match Self::from_json(&preferences) {
				Ok(preferences) => self.apply(preferences, responses),
				Err(error) => {
					warn!("Keeping the current preferences: {error}");
					responses.push_back(
						FrontendMessage::DisplayError {
							title: PREFERENCES_LOAD_FAILED_TITLE.into(),
							description: error.to_string(),
						}
						.into(),
					);
				}
			},
			PreferencesMessage::MaxLabelLength { length } => {
				self.max_label_length = length;
				responses.push_back(RepeatedStyleMessage::Refresh.into());
			}
			PreferencesMessage::ResetToDefaults => self.apply(Self::default(), responses),
			PreferencesMessage::ShowColorSwatches { show } => {
				self.show_color_swatches = show;
				responses.push_back(RepeatedStyleMessage::Refresh.into());
			}
		}
	}
}
