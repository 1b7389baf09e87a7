use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use log::debug;

use crate::metadata::ArticleRecord;

pub(super) fn load_articles(input_path: &Path) -> anyhow::Result<Vec<ArticleRecord>> {
    debug!("Loading articles from {input_path:?}...");
    let fd = File::open(input_path).with_context(|| format!("while opening {input_path:?}"))?;
    let reader = BufReader::new(fd);
    serde_json::from_reader(reader).with_context(|| format!("while parsing {input_path:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_whole_array_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("old.json");
        fs::write(
            &path,
            r#"[
                {"Title": "a", "PublicationDate": "2020-01-01", "Url": "A", "MarkDownContent": "1"},
                {"Title": "b", "PublicationDate": "2020-01-02", "Url": "B", "MarkDownContent": "2"}
            ]"#,
        )
        .unwrap();

        let articles = load_articles(&path).unwrap();
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn empty_array_is_fine() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("old.json");
        fs::write(&path, "[]").unwrap();

        assert!(load_articles(&path).unwrap().is_empty());
    }

    #[test]
    fn reports_missing_file_and_bad_json() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_articles(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("while opening"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, r#"[{"Title": "a"}]"#).unwrap();
        let err = load_articles(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("while parsing"));
    }
}
