use std::path::PathBuf;

#[derive(Debug)]
pub(crate) struct Context {
    pub out_dir: PathBuf,
    pub extension: String,
    pub lang: String,
    pub fail_fast: bool,

    pub handlebars: handlebars::Handlebars<'static>,
}

impl Context {
    pub fn new(
        out_dir: PathBuf,
        extension: String,
        lang: String,
        fail_fast: bool,
        handlebars: handlebars::Handlebars<'static>,
    ) -> Self {
        Self {
            out_dir,
            extension,
            lang,
            fail_fast,
            handlebars,
        }
    }

    /// Where a post with the given stem ends up.
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(format!("{}.{}", stem, self.extension))
    }
}
