use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive metadata stamped once onto a finished output artifact.
///
/// Every field is optional; renderers only emit the ones that are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Vec<String>,
    pub creator: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentMetadata {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the creation date to the current time.
    pub fn stamped_now(mut self) -> Self {
        self.creation_date = Some(Utc::now());
        self
    }

    /// `(key, value)` pairs for the fields that are set, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(title) = &self.title {
            entries.push(("Title", title.clone()));
        }
        if let Some(author) = &self.author {
            entries.push(("Author", author.clone()));
        }
        if let Some(subject) = &self.subject {
            entries.push(("Subject", subject.clone()));
        }
        if !self.keywords.is_empty() {
            entries.push(("Keywords", self.keywords.join(", ")));
        }
        if let Some(creator) = &self.creator {
            entries.push(("Creator", creator.clone()));
        }
        if let Some(date) = &self.creation_date {
            entries.push(("CreationDate", date.format("D:%Y%m%d%H%M%SZ").to_string()));
        }
        entries
    }
}
