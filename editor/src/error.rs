use style_object_model::StyleError;

use thiserror::Error;

/// The error type used by the style panel editor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditorError {
	#[error("The operation caused a style error:\n{0}")]
	Style(#[from] StyleError),

	#[error("The preferences are invalid:\n{0}")]
	InvalidPreferences(String),
}
