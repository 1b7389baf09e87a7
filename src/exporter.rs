use std::{
    collections::HashMap,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use log::{error, info, warn};

use crate::{
    context::Context,
    metadata::ArticleRecord,
    renderer::POST_TEMPLATE_NAME,
    report::{ExportError, ExportReport, RecordOutcome},
};

mod data;
mod utils;

use data::PostData;
use utils::{format_iso_instant, parse_publication_date};

fn render_post(ctx: &Context, article: &ArticleRecord) -> Result<String, ExportError> {
    let date = parse_publication_date(&article.publication_date).map_err(|source| {
        ExportError::InvalidDate {
            raw: article.publication_date.clone(),
            source,
        }
    })?;

    let data = PostData {
        title: &article.title,
        date: format_iso_instant(&date),
        lang: &ctx.lang,
        body: &article.mark_down_content,
    };
    Ok(ctx.handlebars.render(POST_TEMPLATE_NAME, &data)?)
}

fn write_post(path: &Path, document: &str) -> Result<(), ExportError> {
    let write = || -> std::io::Result<()> {
        let mut fd = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        fd.write_all(document.as_bytes())
    };
    write().map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn export_article(ctx: &Context, article: &ArticleRecord) -> Result<PathBuf, ExportError> {
    let document = render_post(ctx, article)?;
    let out_path = ctx.output_path(&article.file_stem());
    write_post(&out_path, &document)?;
    Ok(out_path)
}

/// Runs one export pass over `articles`, in order.
///
/// Without `fail_fast` every record gets an outcome and the pass always
/// finishes. With it, the first failing record aborts the pass and files
/// written so far stay on disk.
pub(crate) fn export(ctx: &Context, articles: &[ArticleRecord]) -> anyhow::Result<ExportReport> {
    info!("Exporting {} article(s) into {:?}", articles.len(), ctx.out_dir);

    let mut report = ExportReport::default();
    let mut seen_stems: HashMap<String, usize> = HashMap::new();

    for (i, article) in articles.iter().enumerate() {
        match export_article(ctx, article) {
            Ok(path) => {
                if let Some(prev) = seen_stems.insert(article.file_stem(), i) {
                    warn!(
                        "Article #{i} ({:?}) overwrote article #{prev} with the same url",
                        article.url
                    );
                    report.overwrites.push((i, prev));
                }
                report.outcomes.push(RecordOutcome::Written(path));
            }
            Err(e) if ctx.fail_fast => {
                return Err(e).with_context(|| format!("while exporting article {:?}", article.url));
            }
            Err(e) => {
                error!("Skipping article {:?}: {}", article.url, e.chain());
                report.outcomes.push(RecordOutcome::Failed {
                    url: article.url.clone(),
                    error: e,
                });
            }
        }
    }

    info!("{} written, {} failed", report.written(), report.failed());
    Ok(report)
}
