use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

// EbookSummary is a catalog match together with its number of ebook editions
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct EbookSummary {
    pub title: String,
    pub ebook_count: i64,
}

impl EbookSummary {
    pub fn new(title: &str, ebook_count: i64) -> Self {
        Self {
            title: title.to_string(),
            ebook_count,
        }
    }
}

// BookInfo holds the descriptive metadata of a catalog match
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    #[serde(default)]
    pub language: BTreeSet<String>,
    pub publisher: Option<Vec<String>>,
    pub publish_year: Option<Vec<i64>>,
}

impl BookInfo {
    pub fn new(title: &str, languages: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            language: languages.iter().map(|l| l.to_string()).collect(),
            publisher: None,
            publish_year: None,
        }
    }
}

// SearchResponse mirrors the subset of the search.json payload the client reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: i64,
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchDoc {
    #[serde(default)]
    pub title: String,
    pub title_suggest: Option<String>,
    pub ebook_count_i: Option<i64>,
    pub language: Option<Vec<String>>,
    pub publisher: Option<Vec<String>>,
    pub publish_year: Option<Vec<i64>>,
}

impl From<&SearchDoc> for BookInfo {
    fn from(other: &SearchDoc) -> Self {
        Self {
            title: other.title.to_string(),
            language: other.language.iter().flatten().cloned().collect(),
            publisher: other.publisher.clone(),
            publish_year: other.publish_year.clone(),
        }
    }
}

impl SearchDoc {
    pub(crate) fn suggested_title(&self) -> String {
        self.title_suggest.clone().unwrap_or_else(|| self.title.to_string())
    }

    pub(crate) fn to_ebook(&self) -> Option<EbookSummary> {
        match self.ebook_count_i {
            Some(count) if count >= 1 => Some(EbookSummary::new(self.title.as_str(), count)),
            _ => None,
        }
    }
}
