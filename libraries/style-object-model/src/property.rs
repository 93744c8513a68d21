use crate::StyleError;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The CSS properties known to the style object model, named by their kebab-case CSS name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StyleProperty {
	// Single-valued
	BackgroundColor,
	Color,
	Opacity,

	// Backgrounds
	BackgroundAttachment,
	BackgroundBlendMode,
	BackgroundClip,
	BackgroundImage,
	BackgroundOrigin,
	BackgroundPositionX,
	BackgroundPositionY,
	BackgroundRepeat,
	BackgroundSize,

	// Shadows
	BoxShadow,
	TextShadow,

	// Filters
	Filter,
	BackdropFilter,

	// Transitions
	TransitionProperty,
	TransitionDuration,
	TransitionTimingFunction,
	TransitionDelay,
	TransitionBehavior,
}

impl StyleProperty {
	/// Whether the property holds a comma separated list of layers.
	pub fn is_repeated(&self) -> bool {
		!matches!(self, StyleProperty::BackgroundColor | StyleProperty::Color | StyleProperty::Opacity)
	}

	/// Every repeated property, in declaration order.
	pub fn repeated() -> impl Iterator<Item = StyleProperty> {
		StyleProperty::iter().filter(StyleProperty::is_repeated)
	}

	/// Parses a CSS property name, reporting unknown names as a [StyleError].
	pub fn parse(name: &str) -> Result<Self, StyleError> {
		StyleProperty::from_str(name).map_err(|_| StyleError::UnknownProperty(name.to_string()))
	}
}
