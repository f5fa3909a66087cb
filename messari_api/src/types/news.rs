//! News and research articles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article from `v1/news` or `v1/news/{key}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    /// Article body, in markdown.
    pub content: String,
    #[serde(default)]
    pub references: Vec<NewsReference>,
    #[serde(rename = "previewImage")]
    pub preview_image: Option<String>,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: NewsAuthor,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewsReference {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewsAuthor {
    pub name: String,
    pub url: Option<String>,
}
