use serde::{Deserialize, Serialize};

#[remain::sorted]
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize, strum::IntoStaticStr)]
pub enum PreferencesMessage {
	/// Replaces every preference with the ones in a JSON document.
	Load { preferences: String },
	MaxLabelLength { length: usize },
	ResetToDefaults,
	ShowColorSwatches { show: bool },
}
