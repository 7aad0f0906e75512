//! Markdown helpers used while indexing: front-matter splitting, title
//! extraction and the plain-text excerpt shown in topic cards and search
//! results.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

use crate::error::Result;

/// Maximum excerpt length, in characters, when nothing else is configured.
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

const FRONT_MATTER_FENCE: &str = "---";
const ELLIPSIS: &str = "...";

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#+\s").expect("heading marker pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("link pattern"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern"));
static LEVEL_ONE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("heading pattern"));

/// A markdown document split into its front-matter and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub front_matter: Mapping,
    pub body: String,
}

impl Document {
    /// Parses a raw markdown file. Malformed YAML front-matter is an error.
    pub fn parse(raw: &str) -> Result<Self> {
        let (front_matter, body) = split_front_matter(raw)?;
        Ok(Self { front_matter, body })
    }

    /// The `title` field of the front-matter, if it is a string.
    pub fn front_matter_title(&self) -> Option<&str> {
        self.front_matter.get("title").and_then(Value::as_str)
    }

    /// Text of the first level-1 heading in the body.
    pub fn heading(&self) -> Option<String> {
        first_heading(&self.body)
    }

    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.body, max_chars)
    }

    /// Excerpt of the body with the title heading line removed, so a topic
    /// summary does not repeat the topic title.
    pub fn summary(&self, max_chars: usize) -> String {
        excerpt(&strip_first_heading(&self.body), max_chars)
    }
}

/// Splits a leading `---` fenced YAML block off a document.
///
/// Documents without an opening fence, or whose fence is never closed, are
/// returned unchanged with empty front-matter.
pub fn split_front_matter(raw: &str) -> Result<(Mapping, String)> {
    let mut lines = raw.split_inclusive('\n');

    let yaml_start = match lines.next() {
        Some(first) if first.trim_end() == FRONT_MATTER_FENCE => first.len(),
        _ => return Ok((Mapping::new(), raw.to_string())),
    };

    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FRONT_MATTER_FENCE {
            let yaml = &raw[yaml_start..offset];
            let body = &raw[offset + line.len()..];
            return Ok((parse_yaml_mapping(yaml)?, body.to_string()));
        }
        offset += line.len();
    }

    Ok((Mapping::new(), raw.to_string()))
}

fn parse_yaml_mapping(yaml: &str) -> Result<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Ok(Mapping::new()),
    }
}

/// Returns the trimmed text of the first line shaped like `# Title`.
pub fn first_heading(body: &str) -> Option<String> {
    LEVEL_ONE_HEADING
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Removes the first level-1 heading line together with its line break.
pub fn strip_first_heading(body: &str) -> String {
    match LEVEL_ONE_HEADING.find(body) {
        Some(m) => {
            let rest = &body[m.end()..];
            let rest = rest
                .strip_prefix("\r\n")
                .or_else(|| rest.strip_prefix('\n'))
                .unwrap_or(rest);
            format!("{}{rest}", &body[..m.start()])
        }
        None => body.to_string(),
    }
}

/// Reduces a markdown body to a single line of plain text of at most
/// `max_chars` characters, followed by `...` when it was cut short.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let text = HEADING_MARKER.replace_all(body, "");
    let text = LINK.replace_all(&text, "$1");
    let text = LINE_BREAK.replace_all(&text, " ");

    let truncated: String = text.chars().take(max_chars).collect();
    let mut excerpt = truncated.trim().to_string();
    if text.chars().count() > max_chars {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}
