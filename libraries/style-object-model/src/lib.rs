//! # Style object model
//! A style sheet is a set of [StyleProperty] declarations, each holding a [StyleValue].
//! Some properties are *repeated*: their value is a [LayersValue], an ordered list of layers that apply in parallel
//! with the layers of related properties (the third `background-size` layer sizes the third `background-image` layer).
//!
//! Edits that change the structure of those layers (hiding, deleting, or reordering one) go through
//! [apply_transform](layers::apply_transform), which keeps every property of a [StyleDeclarationGroup](layers::StyleDeclarationGroup)
//! in step and commits the result as a single [BatchUpdate](store::BatchUpdate).

pub mod error;
pub mod layers;
pub mod property;
pub mod response;
pub mod store;
pub mod value;

pub use error::StyleError;
pub use layers::{LayerEdit, StyleDeclarationGroup, apply_transform};
pub use property::StyleProperty;
pub use response::StyleResponse;
pub use store::{BatchUpdate, StyleOperation, StyleSheet, StyleStore};
pub use value::{Layer, LayerItem, LayersValue, RgbValue, ShadowValue, StyleValue};
