// `macro_use` puts the log macros (`error!`, `warn!`, `debug!`, `info!` and `trace!`) in scope for the crate
#[macro_use]
extern crate log;

/// The dispatcher-owning [Editor](application::Editor) that the frontend talks to.
pub mod application;
/// Global constants used by the panel.
pub mod consts;
/// Drains the message queues, routing each message to its handler.
pub mod dispatcher;
/// The error type returned by the fallible [Editor](application::Editor) entry points.
pub mod error;
/// The messages and message handlers of the panel.
pub mod messages;
/// Traits shared by every message handler.
pub mod utility_traits;

#[cfg(test)]
pub mod test_utils;

#[doc(inline)]
pub use error::EditorError;
