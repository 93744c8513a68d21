use crate::application::Editor;
use crate::messages::prelude::*;
use crate::messages::repeated_style::item_describer::{ItemDescriber, LayerItemDescriber};

use style_object_model::{Layer, LayerItem, LayersValue};

/// A set of utility functions to make the writing of editor tests more declarative
pub struct EditorTestUtils {
	pub editor: Editor,
}

impl EditorTestUtils {
	pub fn create(style_sheet: StyleSheet) -> Self {
		init_logger();
		Self {
			editor: Editor::with_style_sheet(style_sheet),
		}
	}

	pub fn handle_message(&mut self, message: impl Into<Message>) -> Vec<FrontendMessage> {
		self.editor.handle_message(message)
	}

	pub fn edit_group(&mut self, label: &str, group: StyleDeclarationGroup) -> Vec<FrontendMessage> {
		self.handle_message(RepeatedStyleMessage::SetGroup { label: label.into(), group })
	}

	pub fn style_sheet(&self) -> &StyleSheet {
		self.editor.style_sheet()
	}
}

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// `background-image` driving `background-size` and `background-position-x`.
pub fn background_group() -> StyleDeclarationGroup {
	StyleDeclarationGroup::new(StyleProperty::BackgroundImage, [StyleProperty::BackgroundSize, StyleProperty::BackgroundPositionX])
}

/// A sheet with one image layer per entry of `images` and one keyword layer per entry of `sizes`. Empty lists leave the property unset.
pub fn background_sheet(images: &[&str], sizes: &[&str]) -> StyleSheet {
	let mut style_sheet = StyleSheet::new();
	if !images.is_empty() {
		let layers: LayersValue = images.iter().map(|image| Layer::new(LayerItem::image(*image))).collect();
		style_sheet.set_local(StyleProperty::BackgroundImage, layers).expect("Image layers should be valid");
	}
	if !sizes.is_empty() {
		let layers: LayersValue = sizes.iter().map(|size| Layer::new(LayerItem::keyword(*size))).collect();
		style_sheet.set_local(StyleProperty::BackgroundSize, layers).expect("Size layers should be valid");
	}
	style_sheet
}

/// The list label of every layer of `property`, or nothing when it holds no layers.
pub fn layer_labels(style_sheet: &StyleSheet, property: StyleProperty) -> Vec<String> {
	let Some(layers) = style_sheet.cascaded_value(property).and_then(|value| value.as_layers()) else {
		return Vec::new();
	};
	layers.iter().enumerate().map(|(index, layer)| LayerItemDescriber.describe(index, layer).label).collect()
}

pub fn hidden_flags(style_sheet: &StyleSheet, property: StyleProperty) -> Vec<bool> {
	style_sheet
		.cascaded_value(property)
		.and_then(|value| value.as_layers())
		.map(|layers| layers.iter().map(|layer| layer.hidden).collect())
		.unwrap_or_default()
}

pub mod test_prelude {
	pub use super::{EditorTestUtils, background_group, background_sheet, hidden_flags, init_logger, layer_labels};
	pub use crate::application::Editor;
	pub use crate::messages::prelude::*;
}
