use serde::{Deserialize, Serialize};

#[remain::sorted]
#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize, strum::IntoStaticStr)]
pub enum DebugMessage {
	MessageContents,
	MessageNames,
	MessageOff,
	ToggleTraceLogs,
}
