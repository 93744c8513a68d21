//! # Layer transforms
//! Repeated properties that describe one visual effect (for example `background-image`, `background-position-x` and
//! `background-size`) are edited together as a [StyleDeclarationGroup]. Each layer of the effect is addressed by its index,
//! so a structural edit has to touch the same index of every property in the group.
//!
//! Properties of a group do not always declare the same number of layers. CSS repeats the shorter lists to cover the
//! longest one, so before an edit every property is normalized to the layer count of the group's primary property with
//! [repeat_until], then the edit is applied, then every result is written back in one [BatchUpdate].

use crate::{BatchUpdate, LayersValue, StyleError, StyleProperty, StyleResponse, StyleStore, StyleValue};

use serde::{Deserialize, Serialize};
use std::iter;

/// Repeats `items` in order until `count` items are produced, truncating when `items` is longer than `count`.
/// An empty `items` always produces an empty result.
pub fn repeat_until<T: Clone>(items: &[T], count: usize) -> Vec<T> {
	items.iter().cycle().take(count).cloned().collect()
}

// =========
// LayerEdit
// =========

/// A structural edit of one layer, addressed by its index in the normalized layer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerEdit {
	/// Toggles whether the layer is hidden.
	Hide { index: usize },
	/// Removes the layer, shifting the following layers down by one.
	Delete { index: usize },
	/// Removes the layer at `old_index` and reinserts it at `new_index`.
	Move { old_index: usize, new_index: usize },
}

impl LayerEdit {
	pub fn apply(&self, layers: &LayersValue) -> LayersValue {
		match *self {
			LayerEdit::Hide { index } => hide_layer(layers, index),
			LayerEdit::Delete { index } => delete_layer(layers, index),
			LayerEdit::Move { old_index, new_index } => move_layer(layers, old_index, new_index),
		}
	}
}

pub fn hide_layer(layers: &LayersValue, index: usize) -> LayersValue {
	layers
		.iter()
		.enumerate()
		.map(|(layer_index, layer)| {
			let mut layer = layer.clone();
			if layer_index == index {
				layer.hidden = !layer.hidden;
			}
			layer
		})
		.collect()
}

pub fn delete_layer(layers: &LayersValue, index: usize) -> LayersValue {
	layers.iter().enumerate().filter(|(layer_index, _)| *layer_index != index).map(|(_, layer)| layer.clone()).collect()
}

/// Moves a layer to a new position. This is a move rather than a swap: the layers in between shift by one.
/// Lists with fewer than two layers, and an `old_index` past the end, are returned unchanged.
pub fn move_layer(layers: &LayersValue, old_index: usize, new_index: usize) -> LayersValue {
	let mut value = layers.value.clone();
	if value.len() >= 2 && old_index < value.len() {
		let layer = value.remove(old_index);
		value.insert(new_index.min(value.len()), layer);
	}
	LayersValue { value }
}

// ======================
// StyleDeclarationGroup
// ======================

/// Properties whose layers are edited in parallel. The layer count of the `primary` property is authoritative for the group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SerializedGroup")]
pub struct StyleDeclarationGroup {
	primary: StyleProperty,
	secondary: Vec<StyleProperty>,
}

/// The serialized form of a [StyleDeclarationGroup], rebuilt through [StyleDeclarationGroup::new] so repeats are dropped.
#[derive(Deserialize)]
struct SerializedGroup {
	primary: StyleProperty,
	#[serde(default)]
	secondary: Vec<StyleProperty>,
}

impl From<SerializedGroup> for StyleDeclarationGroup {
	fn from(group: SerializedGroup) -> Self {
		Self::new(group.primary, group.secondary)
	}
}

impl StyleDeclarationGroup {
	/// Creates a group led by `primary`. Repeats of a property, including of the primary, are dropped.
	pub fn new(primary: StyleProperty, others: impl IntoIterator<Item = StyleProperty>) -> Self {
		let mut secondary: Vec<StyleProperty> = Vec::new();
		for property in others {
			if property != primary && !secondary.contains(&property) {
				secondary.push(property);
			}
		}
		Self { primary, secondary }
	}

	pub fn primary(&self) -> StyleProperty {
		self.primary
	}

	/// Every property of the group, primary first.
	pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
		iter::once(self.primary).chain(self.secondary.iter().copied())
	}

	pub fn contains(&self, property: StyleProperty) -> bool {
		self.properties().any(|member| member == property)
	}

	/// The layers of the primary property, if it currently holds layers.
	pub fn primary_layers<'a, S: StyleStore + ?Sized>(&self, store: &'a S) -> Option<&'a LayersValue> {
		store.cascaded_value(self.primary).and_then(StyleValue::as_layers)
	}

	/// The number of layers every property of the group is treated as having.
	pub fn layer_count<S: StyleStore + ?Sized>(&self, store: &S) -> usize {
		self.primary_layers(store).map_or(0, LayersValue::len)
	}
}

/// Applies `edit` to every property of `group` that holds layers and commits the results as a single batch.
///
/// Each property is first normalized to the layer count of the group's primary property, so `edit` addresses the same
/// logical layer everywhere. A property left without layers is deleted instead of being set to an empty list.
/// Properties that do not hold layers are skipped and never written.
pub fn apply_transform<S: StyleStore + ?Sized>(store: &mut S, group: &StyleDeclarationGroup, edit: LayerEdit) -> Result<Vec<StyleResponse>, StyleError> {
	let layer_count = group.layer_count(&*store);
	log::debug!("Applying {edit:?} to {} layer(s) of `{}`", layer_count, group.primary());

	let mut batch = BatchUpdate::new();
	for property in group.properties() {
		let Some(layers) = store.cascaded_value(property).and_then(StyleValue::as_layers) else {
			log::trace!("Skipping `{property}` since it does not hold layers");
			continue;
		};

		let normalized = LayersValue::new(repeat_until(&layers.value, layer_count));
		let new_layers = edit.apply(&normalized);

		if new_layers.is_empty() {
			batch.delete_property(property);
		} else {
			batch.set_property(property, new_layers);
		}
	}

	batch.publish(store)
}
