// Utility functions
// Text shaping and duration parsing shared by the translators.

pub mod duration;
pub mod text;

pub use duration::duration_seconds;
pub use text::{first_line, short, truncate};
