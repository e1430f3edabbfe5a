use std::fmt::{self, Display, Formatter};

use regex::Regex;
use serde::Deserialize;

use crate::questions::question::{ChoiceOption, Question};

#[derive(Debug)]
pub enum ParseError {
    Format(String),
    Frontmatter(serde_yaml::Error),
    UnknownType(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Format(msg) => write!(f, "Invalid question format: {}", msg),
            ParseError::Frontmatter(e) => write!(f, "Invalid frontmatter: {}", e),
            ParseError::UnknownType(t) => write!(f, "Unknown question type: '{}'", t),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_yaml::Error> for ParseError {
    fn from(value: serde_yaml::Error) -> Self { ParseError::Frontmatter(value) }
}

#[derive(Debug, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    tags: Vec<String>,
}

/// Parses question documents: a YAML frontmatter block and a markdown body,
/// delimited by `---` fences. Multiple-choice bodies carry the description
/// followed by `- [x]` / `- [ ]` option lines; open questions are all
/// description.
pub struct QuestionParser {
    description_re: Regex,
    option_re: Regex,
}

impl QuestionParser {
    pub fn new() -> Self {
        Self {
            // Description runs up to the first option line
            description_re: Regex::new(r"(?s)^(.*?)(?:\n- |$)").expect("valid regex"),
            option_re: Regex::new(r"(?m)-\s*\[([xX ])\]\s*(.*?)\s*$").expect("valid regex"),
        }
    }

    pub fn parse_question(&self, input: &str) -> Result<Question, ParseError> {
        let parts = split_fenced_blocks(input);
        if parts.len() != 2 {
            return Err(ParseError::Format(
                "document must contain frontmatter and body".into(),
            ));
        }
        self.parse_block(parts[0], parts[1])
    }

    pub fn parse_questions(&self, input: &str) -> Result<Vec<Question>, ParseError> {
        let parts = split_fenced_blocks(input);
        if parts.is_empty() || parts.len() % 2 != 0 {
            return Err(ParseError::Format(
                "document must contain frontmatter/body pairs".into(),
            ));
        }
        parts
            .chunks(2)
            .map(|pair| self.parse_block(pair[0], pair[1]))
            .collect()
    }

    fn parse_block(&self, frontmatter: &str, body: &str) -> Result<Question, ParseError> {
        let meta: Frontmatter = serde_yaml::from_str(frontmatter)?;
        match meta.kind.as_str() {
            "multiple-choice" => Ok(self.parse_multiple_choice(body, meta)),
            "open" => Ok(Question::Open {
                id: meta.id,
                tags: meta.tags,
                description: body.trim().to_string(),
            }),
            other => Err(ParseError::UnknownType(other.to_string())),
        }
    }

    fn parse_multiple_choice(&self, body: &str, meta: Frontmatter) -> Question {
        let description = self
            .description_re
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let options = self
            .option_re
            .captures_iter(body)
            .map(|c| ChoiceOption {
                text: c[2].to_string(),
                is_correct: c[1].eq_ignore_ascii_case("x"),
            })
            .collect();

        Question::MultipleChoice {
            id: meta.id,
            tags: meta.tags,
            description,
            options,
        }
    }
}

impl Default for QuestionParser {
    fn default() -> Self { Self::new() }
}

fn split_fenced_blocks(input: &str) -> Vec<&str> {
    input
        .split("---")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
