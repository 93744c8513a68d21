use style_object_model::RgbValue;

use serde::{Deserialize, Serialize};

/// One row of the repeated style list, describing a layer of the group's primary property.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct RepeatedStyleEntry {
	/// Identity of the row for the sortable list. Rows are identified by position, so this is the index as a string.
	pub id: String,
	pub index: usize,
	pub label: String,
	pub hidden: bool,
	/// Swatch shown next to the label.
	pub color: Option<RgbValue>,
}
