use serde::{Deserialize, Serialize};
use std::fmt;

// ==========
// StyleValue
// ==========

/// The value of a single style declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyleValue {
	Keyword { value: String },
	Unit { unit: String, value: f64 },
	Rgb(RgbValue),
	Image { url: String },
	Tuple { value: Vec<StyleValue> },
	Shadow(ShadowValue),
	Function { name: String, args: String },
	Unparsed { value: String },
	/// A comma separated list of values, one per layer.
	Layers(LayersValue),
}

impl StyleValue {
	pub fn keyword(value: impl Into<String>) -> Self {
		StyleValue::Keyword { value: value.into() }
	}

	pub fn as_layers(&self) -> Option<&LayersValue> {
		match self {
			StyleValue::Layers(layers) => Some(layers),
			_ => None,
		}
	}
}

impl From<LayersValue> for StyleValue {
	fn from(layers: LayersValue) -> Self {
		StyleValue::Layers(layers)
	}
}

// ===========
// LayersValue
// ===========

/// The ordered layers of a repeated property.
/// Layers have no identity besides their position in `value`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayersValue {
	pub value: Vec<Layer>,
}

impl LayersValue {
	pub fn new(value: Vec<Layer>) -> Self {
		Self { value }
	}

	pub fn len(&self) -> usize {
		self.value.len()
	}

	pub fn is_empty(&self) -> bool {
		self.value.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
		self.value.iter()
	}
}

impl FromIterator<Layer> for LayersValue {
	fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
		Self { value: iter.into_iter().collect() }
	}
}

// =====
// Layer
// =====

/// One entry of a [LayersValue]. An absent `hidden` flag reads as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
	#[serde(flatten)]
	pub item: LayerItem,
	#[serde(default, skip_serializing_if = "is_false")]
	pub hidden: bool,
}

impl Layer {
	pub fn new(item: LayerItem) -> Self {
		Self { item, hidden: false }
	}

	pub fn hidden(item: LayerItem) -> Self {
		Self { item, hidden: true }
	}
}

impl From<LayerItem> for Layer {
	fn from(item: LayerItem) -> Self {
		Layer::new(item)
	}
}

fn is_false(value: &bool) -> bool {
	!*value
}

/// The payload of a layer. Structural edits never look inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerItem {
	Keyword { value: String },
	Unit { unit: String, value: f64 },
	Image { url: String },
	Tuple { value: Vec<StyleValue> },
	Shadow(ShadowValue),
	Function { name: String, args: String },
	Unparsed { value: String },
}

impl LayerItem {
	pub fn keyword(value: impl Into<String>) -> Self {
		LayerItem::Keyword { value: value.into() }
	}

	pub fn image(url: impl Into<String>) -> Self {
		LayerItem::Image { url: url.into() }
	}

	pub fn px(value: f64) -> Self {
		LayerItem::Unit { unit: "px".into(), value }
	}
}

// ===========
// ShadowValue
// ===========

/// A single `box-shadow` or `text-shadow` layer with lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowValue {
	#[serde(default)]
	pub inset: bool,
	pub offset_x: f64,
	pub offset_y: f64,
	#[serde(default)]
	pub blur: f64,
	#[serde(default)]
	pub spread: f64,
	pub color: Option<RgbValue>,
}

// ========
// CSS text
// ========

fn format_number(f: &mut fmt::Formatter, value: f64, unit: &str) -> fmt::Result {
	match unit {
		"number" => write!(f, "{value}"),
		"percent" => write!(f, "{value}%"),
		unit => write!(f, "{value}{unit}"),
	}
}

fn format_list(f: &mut fmt::Formatter, items: &[StyleValue], separator: &str) -> fmt::Result {
	for (index, item) in items.iter().enumerate() {
		if index > 0 {
			f.write_str(separator)?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

impl fmt::Display for StyleValue {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			StyleValue::Keyword { value } | StyleValue::Unparsed { value } => f.write_str(value),
			StyleValue::Unit { unit, value } => format_number(f, *value, unit),
			StyleValue::Rgb(color) => write!(f, "{color}"),
			StyleValue::Image { url } => write!(f, "url(\"{url}\")"),
			StyleValue::Tuple { value } => format_list(f, value, " "),
			StyleValue::Shadow(shadow) => write!(f, "{shadow}"),
			StyleValue::Function { name, args } => write!(f, "{name}({args})"),
			StyleValue::Layers(layers) => {
				// Hidden layers are not part of the rendered value
				let visible: Vec<_> = layers.iter().filter(|layer| !layer.hidden).map(|layer| layer.item.to_string()).collect();
				if visible.is_empty() { f.write_str("none") } else { f.write_str(&visible.join(", ")) }
			}
		}
	}
}

impl fmt::Display for LayerItem {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			LayerItem::Keyword { value } | LayerItem::Unparsed { value } => f.write_str(value),
			LayerItem::Unit { unit, value } => format_number(f, *value, unit),
			LayerItem::Image { url } => write!(f, "url(\"{url}\")"),
			LayerItem::Tuple { value } => format_list(f, value, " "),
			LayerItem::Shadow(shadow) => write!(f, "{shadow}"),
			LayerItem::Function { name, args } => write!(f, "{name}({args})"),
		}
	}
}

impl fmt::Display for ShadowValue {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.inset {
			f.write_str("inset ")?;
		}
		write!(f, "{}px {}px {}px {}px", self.offset_x, self.offset_y, self.blur, self.spread)?;
		if let Some(color) = self.color {
			write!(f, " {color}")?;
		}
		Ok(())
	}
}

impl fmt::Display for RgbValue {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
	}
}

// ========
// RgbValue
// ========

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbValue {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub alpha: f32,
}

impl RgbValue {
	pub const BLACK: Self = RgbValue { r: 0, g: 0, b: 0, alpha: 1. };

	pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
		Self { r, g, b, alpha }
	}
}
