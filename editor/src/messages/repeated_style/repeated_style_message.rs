use style_object_model::StyleDeclarationGroup;

use serde::{Deserialize, Serialize};

#[remain::sorted]
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize, strum::IntoStaticStr)]
pub enum RepeatedStyleMessage {
	ClearGroup,
	Delete {
		index: usize,
	},
	Refresh,
	SetGroup {
		label: String,
		group: StyleDeclarationGroup,
	},
	/// Sent once a drag gesture over the layer list completes.
	Sort {
		old_index: usize,
		new_index: usize,
	},
	ToggleHidden {
		index: usize,
	},
}
