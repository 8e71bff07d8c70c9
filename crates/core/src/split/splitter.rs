//! Cutting a markdown body into sections at second-level headings.

/// Prefix that marks a split point at the start of a line.
const SECTION_MARKER: &str = "## ";

/// A second-level heading and the text under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text after `## `, trimmed.
    pub title: String,
    /// Text after the heading line, trimmed.
    pub body: String,
}

/// A body split into its preamble and sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBody<'a> {
    /// Everything before the first `## ` line, unmodified.
    pub main: &'a str,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

/// Split `body` at every line that begins with exactly `## `.
///
/// Deeper headings (`### `, `#### `) and `##` without a following space stay
/// inside the current piece.
pub fn split(body: &str) -> SplitBody<'_> {
    let mut cuts = Vec::new();
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.starts_with(SECTION_MARKER) {
            cuts.push(offset);
        }
        offset += line.len();
    }

    let main_end = cuts.first().copied().unwrap_or(body.len());
    let sections = cuts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = cuts.get(i + 1).copied().unwrap_or(body.len());
            parse_section(&body[start..end])
        })
        .collect();

    SplitBody { main: &body[..main_end], sections }
}

fn parse_section(piece: &str) -> Section {
    let (heading, rest) = piece.split_once('\n').unwrap_or((piece, ""));
    let title = heading.strip_prefix(SECTION_MARKER).unwrap_or(heading).trim();
    Section { title: title.to_string(), body: rest.trim().to_string() }
}
