use super::utility_types::RepeatedStyleEntry;

use serde::{Deserialize, Serialize};

#[remain::sorted]
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize, strum::IntoStaticStr)]
pub enum FrontendMessage {
	// Clear prefix: remove something the frontend shows
	ClearRepeatedStyle,

	// Display prefix: make the frontend show something, like a dialog
	DisplayError {
		title: String,
		description: String,
	},

	// Update prefix: give the frontend a new value or state for it to use
	UpdateRepeatedStyle {
		label: String,
		items: Vec<RepeatedStyleEntry>,
	},
}
