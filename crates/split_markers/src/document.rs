// crates/split_markers/src/document.rs

use crate::grammar::MARKER_RE;

/// One marker line and the text that follows it, up to the next marker or
/// the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// The raw marker line, including its line terminator.
    pub marker: &'a str,
    /// The name captured from the marker.
    pub target: &'a str,
    /// Everything after the marker line, up to the next marker line.
    pub body: &'a str,
}

/// A `.split` file broken into its preamble and its marker sections.
///
/// All fields borrow from the parsed text, so
/// `preamble + (marker + body)*` is always the original input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Text before the first marker. Empty when the input starts with one.
    pub preamble: &'a str,
    /// Sections in document order.
    pub sections: Vec<Section<'a>>,
}

impl<'a> SplitDocument<'a> {
    /// True when there is any text (whitespace included) before the first marker.
    pub fn has_preamble(&self) -> bool {
        !self.preamble.is_empty()
    }

    /// Target names in document order, duplicates included.
    pub fn target_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sections.iter().map(|section| section.target)
    }

    /// Rebuilds the source text from the parsed pieces.
    pub fn reassemble(&self) -> String {
        let mut out = String::from(self.preamble);
        for section in &self.sections {
            out.push_str(section.marker);
            out.push_str(section.body);
        }
        out
    }
}

/// Splits `text` on marker lines.
///
/// The returned document has one section per marker line; the text before the
/// first marker (possibly empty) becomes the preamble. A file without any
/// marker is all preamble.
pub fn parse(text: &str) -> SplitDocument<'_> {
    let mut sections = Vec::new();
    let mut preamble_end = text.len();
    // (marker line, target, offset where its body starts)
    let mut open: Option<(&str, &str, usize)> = None;

    for caps in MARKER_RE.captures_iter(text) {
        let (Some(line), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        match open.take() {
            Some((marker, target, body_start)) => sections.push(Section {
                marker,
                target,
                body: &text[body_start..line.start()],
            }),
            None => preamble_end = line.start(),
        }
        open = Some((line.as_str(), name.as_str(), line.end()));
    }

    if let Some((marker, target, body_start)) = open {
        sections.push(Section {
            marker,
            target,
            body: &text[body_start..],
        });
    }

    SplitDocument {
        preamble: &text[..preamble_end],
        sections,
    }
}
