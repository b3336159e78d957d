//! Text cleanup and sentence segmentation

pub mod sanitize;
pub mod segment;

pub use sanitize::{normalize_list_marker, sanitize, strip_boilerplate};
pub use segment::{SentenceSegmenter, UnicodeSegmenter};
