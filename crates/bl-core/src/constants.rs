//! Emoji and sentinel constants.
//!
//! Emojis are plain strings so callers can pass their own; these are the
//! ones Boolog itself uses.

pub const EMOJI_SETUP: &str = "🛠";
pub const EMOJI_CLEANUP: &str = "🧹";
pub const EMOJI_PASSING_TEST: &str = "✅";
pub const EMOJI_SUBJECTIVE_TEST: &str = "🤔";
pub const EMOJI_INCONCLUSIVE_TEST: &str = "🛑";
pub const EMOJI_FAILING_TEST: &str = "❌";
pub const EMOJI_DEBUG: &str = "🐞";
pub const EMOJI_ERROR: &str = "😱";
pub const EMOJI_BOOLOG: &str = "📝";
pub const EMOJI_TEXT_BOOLOG_CONCLUDE: &str = "⤴️";
pub const EMOJI_TEXT_BLANK_LINE: &str = "";
pub const EMOJI_OBJECT: &str = "🔲";
pub const EMOJI_CAUSED_BY: &str = "→";
pub const EMOJI_OUTGOING: &str = "↗️";
pub const EMOJI_INCOMING: &str = "↩️";

/// Title given to a node constructed without one.
pub const UNKNOWN: &str = "(unknown)";

/// Label used when a rendered value has no variable name.
pub const NAMELESS: &str = "(name not given)";

/// Collections with more entries than this are collapsed behind a toggle.
pub const MAX_OBJECT_FIELDS_TO_DISPLAY: usize = 10;
/// Value rendering stops descending past this depth.
pub const MAX_SHOW_OBJECT_RECURSION: usize = 10;
/// HTTP messages with more headers than this collapse the header table.
pub const MAX_HEADERS_TO_DISPLAY: usize = 10;
/// HTTP payloads longer than this (in chars) are collapsed.
pub const MAX_BODY_LENGTH_TO_DISPLAY: usize = 500;
