use crate::EditorError;
use crate::dispatcher::Dispatcher;
use crate::messages::prelude::*;

pub struct Editor {
	pub dispatcher: Dispatcher,
}

impl Editor {
	/// Construct an editor over an empty style sheet.
	pub fn new() -> Self {
		Self { dispatcher: Dispatcher::new() }
	}

	pub fn with_style_sheet(style_sheet: StyleSheet) -> Self {
		Self {
			dispatcher: Dispatcher::with_style_sheet(style_sheet),
		}
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message, true);

		std::mem::take(&mut self.dispatcher.responses)
	}

	pub fn style_sheet(&self) -> &StyleSheet {
		&self.dispatcher.style_sheet
	}

	/// Replaces the edited style sheet and relists the layers of the current group against it.
	pub fn load_style_sheet(&mut self, json: &str) -> Result<Vec<FrontendMessage>, EditorError> {
		self.dispatcher.style_sheet = StyleSheet::from_json(json)?;
		info!("Loaded a style sheet with {} local declaration(s)", self.dispatcher.style_sheet.local_properties().count());

		Ok(self.handle_message(RepeatedStyleMessage::Refresh))
	}

	pub fn save_style_sheet(&self) -> Result<String, EditorError> {
		Ok(self.dispatcher.style_sheet.to_json()?)
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new()
	}
}
