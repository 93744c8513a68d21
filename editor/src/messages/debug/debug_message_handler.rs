use super::utility_types::MessageLoggingVerbosity;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct DebugMessageHandler {
	pub message_logging_verbosity: MessageLoggingVerbosity,
	/// The log level to go back to once trace logs are toggled off.
	level_before_trace: Option<log::LevelFilter>,
}

impl MessageHandler<DebugMessage, ()> for DebugMessageHandler {
	fn process_message(&mut self, message: DebugMessage, _responses: &mut VecDeque<Message>, _data: ()) {
		match message {
			DebugMessage::MessageContents => self.message_logging_verbosity = MessageLoggingVerbosity::Contents,
			DebugMessage::MessageNames => self.message_logging_verbosity = MessageLoggingVerbosity::Names,
			DebugMessage::MessageOff => self.message_logging_verbosity = MessageLoggingVerbosity::Off,
			DebugMessage::ToggleTraceLogs => match self.level_before_trace.take() {
				Some(level) => log::set_max_level(level),
				None => {
					self.level_before_trace = Some(log::max_level());
					log::set_max_level(log::LevelFilter::Trace);
				}
			},
		}
	}
}

impl From<MessageLoggingVerbosity> for DebugMessage {
	fn from(verbosity: MessageLoggingVerbosity) -> Self {
		match verbosity {
			MessageLoggingVerbosity::Off => DebugMessage::MessageOff,
			MessageLoggingVerbosity::Names => DebugMessage::MessageNames,
			MessageLoggingVerbosity::Contents => DebugMessage::MessageContents,
		}
	}
}
