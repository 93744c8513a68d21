use crate::messages::prelude::*;

/// Implements a message handler struct for a separate message struct.
/// - The first generic argument (`M`) is that message struct type, representing a message enum variant to be matched and handled in `process_message()`.
/// - The second generic argument (`D`) is the type of data that can be passed along by the caller to `process_message()`.
pub trait MessageHandler<M, D> {
	fn process_message(&mut self, message: M, responses: &mut VecDeque<Message>, data: D);
}
