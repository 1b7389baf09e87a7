use serde::Serialize;

/// What the post template sees.
#[derive(Serialize, Debug)]
pub(super) struct PostData<'a> {
    pub title: &'a str,
    pub date: String,
    pub lang: &'a str,
    pub body: &'a str,
}
