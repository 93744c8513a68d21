use crate::{StyleError, StyleProperty, StyleResponse, StyleValue};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read and write access to the declarations a panel edits.
pub trait StyleStore {
	/// The value that applies to `property` after the cascade, if any.
	fn cascaded_value(&self, property: StyleProperty) -> Option<&StyleValue>;

	/// Applies every operation or none of them.
	fn publish(&mut self, operations: Vec<StyleOperation>) -> Result<Vec<StyleResponse>, StyleError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleOperation {
	SetProperty { property: StyleProperty, value: StyleValue },
	DeleteProperty { property: StyleProperty },
}

// ===========
// BatchUpdate
// ===========

/// Queues property changes so they can be committed to a [StyleStore] together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchUpdate {
	operations: Vec<StyleOperation>,
}

impl BatchUpdate {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_property(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
		self.operations.push(StyleOperation::SetProperty { property, value: value.into() });
	}

	pub fn delete_property(&mut self, property: StyleProperty) {
		self.operations.push(StyleOperation::DeleteProperty { property });
	}

	pub fn is_empty(&self) -> bool {
		self.operations.is_empty()
	}

	/// Commits the queued operations. An empty batch does not touch the store.
	pub fn publish<S: StyleStore + ?Sized>(self, store: &mut S) -> Result<Vec<StyleResponse>, StyleError> {
		if self.is_empty() {
			log::trace!("Skipping publish of an empty style batch");
			return Ok(Vec::new());
		}
		store.publish(self.operations)
	}
}

// ==========
// StyleSheet
// ==========

/// An in-memory [StyleStore] with two cascade levels: the `local` declarations being edited,
/// layered over `inherited` declarations which the panel never writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
	#[serde(default)]
	local: BTreeMap<StyleProperty, StyleValue>,
	#[serde(default)]
	inherited: BTreeMap<StyleProperty, StyleValue>,
}

impl StyleSheet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads a sheet saved by [StyleSheet::to_json]. The document must be a JSON object.
	pub fn from_json(json: &str) -> Result<Self, StyleError> {
		let document: serde_json::Value = serde_json::from_str(json)?;
		if !document.is_object() {
			return Err(StyleError::InvalidFile("expected a JSON object of declarations".into()));
		}

		let sheet: StyleSheet = serde_json::from_value(document)?;
		for (property, value) in sheet.local.iter().chain(sheet.inherited.iter()) {
			validate_value(*property, value)?;
		}
		Ok(sheet)
	}

	pub fn to_json(&self) -> Result<String, StyleError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn local_value(&self, property: StyleProperty) -> Option<&StyleValue> {
		self.local.get(&property)
	}

	pub fn local_properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
		self.local.keys().copied()
	}

	/// Declares a local value outside of a batch.
	pub fn set_local(&mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Result<(), StyleError> {
		let value = value.into();
		validate_value(property, &value)?;
		self.local.insert(property, value);
		Ok(())
	}

	pub fn set_inherited(&mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Result<(), StyleError> {
		let value = value.into();
		validate_value(property, &value)?;
		self.inherited.insert(property, value);
		Ok(())
	}
}

impl StyleStore for StyleSheet {
	fn cascaded_value(&self, property: StyleProperty) -> Option<&StyleValue> {
		self.local.get(&property).or_else(|| self.inherited.get(&property))
	}

	fn publish(&mut self, operations: Vec<StyleOperation>) -> Result<Vec<StyleResponse>, StyleError> {
		// Nothing is written until the whole batch is known to be valid
		for operation in &operations {
			if let StyleOperation::SetProperty { property, value } = operation {
				validate_value(*property, value)?;
			}
		}

		let responses: Vec<_> = operations
			.into_iter()
			.map(|operation| match operation {
				StyleOperation::SetProperty { property, value } => {
					self.local.insert(property, value);
					StyleResponse::PropertyChanged { property }
				}
				StyleOperation::DeleteProperty { property } => {
					self.local.remove(&property);
					StyleResponse::PropertyDeleted { property }
				}
			})
			.collect();
		log::debug!("Published style batch with {} operation(s)", responses.len());

		Ok(responses)
	}
}

fn validate_value(property: StyleProperty, value: &StyleValue) -> Result<(), StyleError> {
	match value {
		StyleValue::Layers(_) if !property.is_repeated() => Err(StyleError::NotRepeated(property)),
		StyleValue::Layers(layers) if layers.is_empty() => Err(StyleError::EmptyLayers(property)),
		_ => Ok(()),
	}
}
