use serde::Deserialize;

/// One element of the input array.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ArticleRecord {
    pub title: String,
    pub publication_date: String,
    pub url: String,
    pub mark_down_content: String,
}

impl ArticleRecord {
    /// Output file stem. Two records collide when these are equal.
    pub fn file_stem(&self) -> String {
        self.url.to_lowercase()
    }
}
