use serde::{Deserialize, Serialize};

/// How much of each dispatched message is written to the log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLoggingVerbosity {
	#[default]
	Off,
	Names,
	Contents,
}
