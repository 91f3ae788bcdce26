//! Fenced code block scanner

const FENCE: &str = "```";

/// One display unit of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Prose, whitespace preserved.
    Text(String),
    /// Fenced code. `language` is empty when the fence carried no tag.
    Code { language: String, content: String },
}

impl Segment {
    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }

    /// Header shown above a code block; `code` when the fence had no tag.
    pub fn language_label(&self) -> Option<&str> {
        match self {
            Segment::Code { language, .. } if language.is_empty() => Some("code"),
            Segment::Code { language, .. } => Some(language),
            Segment::Text(_) => None,
        }
    }
}

/// Split `text` into prose and fenced code segments.
///
/// A fence opens with three backticks, an optional tag made of word
/// characters and a newline, and closes at the next three backticks.
/// Fences without a closing marker are left as prose. Never fails.
pub fn render_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(open) = find_opener(text, search_from) {
        let Some(close_rel) = text[open.body_start..].find(FENCE) else {
            break;
        };
        let close = open.body_start + close_rel;

        if open.start > cursor {
            segments.push(Segment::Text(text[cursor..open.start].to_string()));
        }
        segments.push(Segment::Code {
            language: text[open.tag_start..open.tag_end].to_string(),
            content: text[open.body_start..close].trim().to_string(),
        });

        cursor = close + FENCE.len();
        search_from = cursor;
    }

    if segments.is_empty() {
        return vec![Segment::Text(text.to_string())];
    }
    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }
    segments
}

/// Flatten segments for line-oriented output, framing code with its label.
pub fn plain_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Code { content, .. } => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let label = segment.language_label().unwrap_or("code");
                out.push_str(&format!("--- {label} ---\n{content}\n---\n"));
            }
        }
    }
    out
}

struct Opener {
    start: usize,
    tag_start: usize,
    tag_end: usize,
    body_start: usize,
}

fn find_opener(text: &str, from: usize) -> Option<Opener> {
    let bytes = text.as_bytes();
    let mut pos = from;

    while let Some(rel) = text[pos..].find(FENCE) {
        let start = pos + rel;
        let tag_start = start + FENCE.len();
        let tag_end = tag_start
            + bytes[tag_start..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count();

        if bytes.get(tag_end) == Some(&b'\n') {
            return Some(Opener {
                start,
                tag_start,
                tag_end,
                body_start: tag_end + 1,
            });
        }
        // '`' is one byte, so start + 1 is a char boundary.
        pos = start + 1;
    }
    None
}
