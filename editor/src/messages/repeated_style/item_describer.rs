use style_object_model::{Layer, LayerItem, RgbValue, ShadowValue};

/// What the layer list shows for one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProps {
	pub label: String,
	pub color: Option<RgbValue>,
}

/// Describes a layer of the primary property for its row in the layer list.
pub trait ItemDescriber {
	fn describe(&self, index: usize, primary_layer: &Layer) -> ItemProps;
}

impl<F: Fn(usize, &Layer) -> ItemProps> ItemDescriber for F {
	fn describe(&self, index: usize, primary_layer: &Layer) -> ItemProps {
		self(index, primary_layer)
	}
}

/// Labels layers by their CSS text, shortening images to their file name and shadows to their offsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayerItemDescriber;

impl ItemDescriber for LayerItemDescriber {
	fn describe(&self, index: usize, primary_layer: &Layer) -> ItemProps {
		let (label, color) = match &primary_layer.item {
			LayerItem::Image { url } => (file_name(url).to_string(), None),
			LayerItem::Shadow(shadow) => (shadow_label(shadow), shadow.color),
			item => (item.to_string(), None),
		};

		let label = if label.trim().is_empty() { format!("Layer {}", index + 1) } else { label };
		ItemProps { label, color }
	}
}

fn file_name(url: &str) -> &str {
	let path = url.split(['?', '#']).next().unwrap_or(url);
	path.trim_end_matches('/').rsplit('/').next().filter(|name| !name.is_empty()).unwrap_or(url)
}

fn shadow_label(shadow: &ShadowValue) -> String {
	let kind = if shadow.inset { "Inner" } else { "Outer" };
	format!("{kind} shadow: {}px {}px {}px {}px", shadow.offset_x, shadow.offset_y, shadow.blur, shadow.spread)
}
