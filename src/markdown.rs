//! Pulls hex pattern notation out of Markdown documents.
//!
//! Notes embed patterns as fenced code blocks tagged `hexpattern`:
//!
//! ````markdown
//! ```hexpattern
//! (EAST wwaqqqqqeaw)
//! ```
//! ````
//!
//! Only the first non-empty row of a block is the pattern; anything after
//! it is left alone.

/// Info string that marks a pattern block
pub const BLOCK_LANGUAGE: &str = "hexpattern";

/// A `hexpattern` code block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexPatternBlock {
    /// 1-based line of the opening fence
    pub line: usize,
    pub body: String,
}

impl HexPatternBlock {
    /// First non-empty row of the block
    pub fn notation(&self) -> Option<&str> {
        self.body.lines().find(|row| !row.trim().is_empty())
    }
}

struct Fence {
    marker: char,
    len: usize,
}

/// Recognize an opening/closing fence, returning it and the info string
fn parse_fence(line: &str) -> Option<(Fence, &str)> {
    // Up to three spaces of indentation are allowed
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    Some((Fence { marker, len }, rest[len..].trim()))
}

/// Every `hexpattern` block in `markdown`, in document order.
/// An unterminated block runs to the end of the document.
pub fn extract_blocks(markdown: &str) -> Vec<HexPatternBlock> {
    let mut blocks = Vec::new();
    let mut lines = markdown.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let Some((fence, info)) = parse_fence(line) else {
            continue;
        };
        let wanted = info.split_whitespace().next() == Some(BLOCK_LANGUAGE);

        let mut body = Vec::new();
        for (_, inner) in lines.by_ref() {
            if let Some((closing, rest)) = parse_fence(inner) {
                if closing.marker == fence.marker && closing.len >= fence.len && rest.is_empty() {
                    break;
                }
            }
            body.push(inner);
        }

        if wanted {
            blocks.push(HexPatternBlock {
                line: index + 1,
                body: body.join("\n"),
            });
        }
    }

    blocks
}
