use crate::StyleProperty;

use thiserror::Error;

/// A set of different errors that can occur when using this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
	#[error("Unknown style property `{0}`")]
	UnknownProperty(String),

	#[error("Tried to set `{0}` to a layers value without any layers")]
	EmptyLayers(StyleProperty),

	#[error("`{0}` is not a repeated property and cannot hold layers")]
	NotRepeated(StyleProperty),

	#[error("The style sheet could not be read:\n{0}")]
	InvalidFile(String),
}

impl From<serde_json::Error> for StyleError {
	fn from(error: serde_json::Error) -> Self {
		StyleError::InvalidFile(error.to_string())
	}
}
