use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Question {
    MultipleChoice {
        id: Option<String>,
        tags: Vec<String>,
        description: String,
        options: Vec<ChoiceOption>,
    },
    Open {
        id: Option<String>,
        tags: Vec<String>,
        description: String,
    },
}

impl Question {
    pub fn description(&self) -> &str {
        match self {
            Question::MultipleChoice { description, .. } => description,
            Question::Open { description, .. } => description,
        }
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Question::MultipleChoice { tags, .. } => tags,
            Question::Open { tags, .. } => tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub text: String,
    pub is_correct: bool,
}
