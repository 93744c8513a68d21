// LAYER LIST
/// Labels longer than this many characters are cut short in the layer list.
pub const DEFAULT_MAX_LABEL_LENGTH: usize = 40;
pub const LABEL_ELLIPSIS: &str = "…";

// ERRORS
pub const STYLE_UPDATE_FAILED_TITLE: &str = "The style could not be updated";
pub const PREFERENCES_LOAD_FAILED_TITLE: &str = "The preferences could not be loaded";
