use crate::StyleProperty;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reports what a published batch changed, one response per applied operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StyleResponse {
	PropertyChanged { property: StyleProperty },
	PropertyDeleted { property: StyleProperty },
}

impl fmt::Display for StyleResponse {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			StyleResponse::PropertyChanged { property } => write!(f, "PropertyChanged({property})"),
			StyleResponse::PropertyDeleted { property } => write!(f, "PropertyDeleted({property})"),
		}
	}
}
