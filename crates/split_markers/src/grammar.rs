// crates/split_markers/src/grammar.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Extension (without the dot) that identifies a marker file.
pub const SPLIT_EXTENSION: &str = "split";

// A whole line of the form `// FILE: name`, terminated by `\n` or `\r\n`.
// Leading whitespace and any number of slashes (none included) are accepted;
// whitespace around `FILE:` and after the name is optional. Group 1 is the
// target name. A final line without a terminator is never a marker.
const MARKER_PATTERN: &str = r"(?m)^[ \t]*/*[ \t]*FILE:[ \t]*(\S+)[ \t]*\r?\n";

pub(crate) static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MARKER_PATTERN).expect("marker pattern is valid"));
