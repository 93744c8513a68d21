use crate::messages::debug::utility_types::MessageLoggingVerbosity;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct Dispatcher {
	message_queues: Vec<VecDeque<Message>>,
	pub responses: Vec<FrontendMessage>,
	pub message_handlers: DispatcherMessageHandlers,
	pub style_sheet: StyleSheet,
}

#[derive(Debug, Default)]
pub struct DispatcherMessageHandlers {
	debug_message_handler: DebugMessageHandler,
	pub preferences_message_handler: PreferencesMessageHandler,
	pub repeated_style_message_handler: RepeatedStyleMessageHandler,
}

// Variant names which are too frequent to be useful in the message log.
const DEBUG_MESSAGE_ENDING_BLOCK_LIST: &[&str] = &["NoOp", "Batched"];

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_style_sheet(style_sheet: StyleSheet) -> Self {
		Self { style_sheet, ..Default::default() }
	}

	pub fn message_logging_verbosity(&self) -> MessageLoggingVerbosity {
		self.message_handlers.debug_message_handler.message_logging_verbosity
	}

	// If the deepest queues (higher index in queues list) are now empty (after being popped from) then remove them
	fn cleanup_queues(&mut self, leave_last: bool) {
		while self.message_queues.last().filter(|queue| queue.is_empty()).is_some() {
			if leave_last && self.message_queues.len() == 1 {
				break;
			}
			self.message_queues.pop();
		}
	}

	/// Add a message to a queue so that it can be executed.
	/// If `process_after_all_current` is set, all currently queued messages (including children) will be processed first.
	/// If not set, it (and its children) will be processed as soon as possible.
	pub fn schedule_execution(message_queues: &mut Vec<VecDeque<Message>>, process_after_all_current: bool, messages: impl IntoIterator<Item = Message>) {
		match message_queues.first_mut() {
			// If there are currently messages being processed and we are processing after them, add to the end of the first queue
			Some(queue) if process_after_all_current => queue.extend(messages),
			// In all other cases, make a new inner queue and add our message there
			_ => message_queues.push(VecDeque::from_iter(messages)),
		}
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T, process_after_all_current: bool) {
		let message = message.into();

		Self::schedule_execution(&mut self.message_queues, process_after_all_current, [message]);

		while let Some(message) = self.message_queues.last_mut().and_then(VecDeque::pop_front) {
			// Skip processing of this message if it will be processed later (at the end of the shallowest level queue)
			if message.is_side_effect_free() {
				let already_in_queue = self.message_queues.first().filter(|queue| queue.contains(&message)).is_some();
				if already_in_queue {
					self.log_deferred_message(&message, &self.message_queues);
					self.cleanup_queues(false);
					continue;
				} else if self.message_queues.len() > 1 {
					self.log_deferred_message(&message, &self.message_queues);
					self.cleanup_queues(true);
					self.message_queues[0].push_back(message);
					continue;
				}
			}

			self.log_message(&message, &self.message_queues);

			// Create a new queue for the child messages
			let mut queue = VecDeque::new();

			// Process the action by forwarding it to the relevant message handler, or saving the FrontendMessage to be sent to the frontend
			match message {
				Message::Debug(message) => {
					self.message_handlers.debug_message_handler.process_message(message, &mut queue, ());
				}
				Message::Frontend(message) => {
					if let FrontendMessage::DisplayError { title, description } = &message {
						warn!("{title}: {description}");
					}

					// `FrontendMessage`s are saved and will be sent to the frontend after the message queue is done being processed
					self.responses.push(message);
				}
				Message::Preferences(message) => {
					self.message_handlers.preferences_message_handler.process_message(message, &mut queue, ());
				}
				Message::RepeatedStyle(message) => {
					let context = RepeatedStyleMessageContext {
						style_sheet: &mut self.style_sheet,
						preferences: &self.message_handlers.preferences_message_handler,
					};

					self.message_handlers.repeated_style_message_handler.process_message(message, &mut queue, context);
				}
				Message::NoOp => {}
				// Batched messages run as children of the batch, so side effect free messages they cause are deduplicated across the whole batch
				Message::Batched { messages } => queue.extend(messages),
			}

			// If there are child messages, append the queue to the list of queues
			if !queue.is_empty() {
				self.message_queues.push(queue);
			}

			self.cleanup_queues(false);
		}
	}

	/// Create the tree structure for logging the messages as a tree
	fn create_indents(queues: &[VecDeque<Message>]) -> String {
		String::from_iter(queues.iter().enumerate().skip(1).map(|(index, queue)| {
			if index == queues.len() - 1 {
				if queue.is_empty() { "└── " } else { "├── " }
			} else if queue.is_empty() {
				"   "
			} else {
				"│    "
			}
		}))
	}

	/// Logs a message that is about to be executed, either as a tree
	/// with the variant name or the entire payload (depending on settings)
	fn log_message(&self, message: &Message, queues: &[VecDeque<Message>]) {
		let name = message.name();
		if DEBUG_MESSAGE_ENDING_BLOCK_LIST.iter().any(|blocked_name| name.ends_with(blocked_name)) {
			return;
		}

		match self.message_logging_verbosity() {
			MessageLoggingVerbosity::Off => {}
			MessageLoggingVerbosity::Names => info!("{}{name}", Self::create_indents(queues)),
			MessageLoggingVerbosity::Contents => info!("Message: {}{message:?}", Self::create_indents(queues)),
		}
	}

	/// Logs into the tree that the message is side effect free and its execution will be deferred
	fn log_deferred_message(&self, message: &Message, queues: &[VecDeque<Message>]) {
		if let MessageLoggingVerbosity::Names = self.message_logging_verbosity() {
			info!("{}Deferred \"{}\" because it is side effect free", Self::create_indents(queues), message.name());
		}
	}
}
