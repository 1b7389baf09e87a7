use anyhow::{bail, Context as _};
use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use context::Context;
use exporter::export;
use log::{debug, info};
use renderer::generate_renderer;
use source::load_articles;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

mod context;
mod exporter;
mod metadata;
mod renderer;
mod report;
mod source;

fn cli() -> Command {
    command!().args(&[
        Arg::new("input")
            .help("JSON file holding the array of articles")
            .value_parser(value_parser!(PathBuf))
            .default_value("old.json"),
        Arg::new("out_dir")
            .help("Directory posts are written into. Existing files with the same name are overwritten.")
            .value_parser(value_parser!(PathBuf))
            .default_value("source/_posts"),
        Arg::new("extension")
            .long("extension")
            .value_name("EXT")
            .help("Extension of written posts")
            .default_value("md"),
        Arg::new("lang")
            .long("lang")
            .value_name("TAG")
            .help("Value of the `lang` front matter field")
            .default_value("fr"),
        Arg::new("template")
            .long("template")
            .value_name("FILE")
            .help("Handlebars template replacing the built-in post layout. Receives title, date, lang and body.")
            .value_parser(value_parser!(PathBuf)),
        Arg::new("create_out_dir")
            .long("create-out-dir")
            .help("Create out_dir if it does not exist")
            .action(ArgAction::SetTrue),
        Arg::new("fail_fast")
            .long("fail-fast")
            .help("Stop at the first article that cannot be exported")
            .action(ArgAction::SetTrue),
    ])
}

fn prepare_out_dir(out_dir: &Path, create: bool) -> anyhow::Result<()> {
    if out_dir.exists() {
        if !out_dir.is_dir() {
            bail!("out_dir({out_dir:?}) exists but is not a directory.");
        }
    } else if create {
        info!("Creating {out_dir:?}");
        fs_extra::dir::create_all(out_dir, false)?;
    } else {
        bail!("out_dir({out_dir:?}) does not exist. Pass --create-out-dir to create it.");
    }
    Ok(())
}

fn build_context(matches: &ArgMatches) -> anyhow::Result<(PathBuf, Context)> {
    let input: &PathBuf = matches.get_one("input").context("input")?;
    if !input.is_file() {
        bail!("input({input:?}) must be a file.");
    }

    let out_dir: &PathBuf = matches.get_one("out_dir").context("out_dir")?;
    prepare_out_dir(out_dir, matches.get_flag("create_out_dir"))?;

    let extension: &String = matches.get_one("extension").context("extension")?;
    let lang: &String = matches.get_one("lang").context("lang")?;
    let template: Option<&PathBuf> = matches.get_one("template");
    let handlebars = generate_renderer(template.map(PathBuf::as_path))?;

    let ctx = Context::new(
        out_dir.to_owned(),
        extension.to_owned(),
        lang.to_owned(),
        matches.get_flag("fail_fast"),
        handlebars,
    );
    Ok((input.to_owned(), ctx))
}

/// Prints the number of loaded articles as a bare line.
fn report_count(out: &mut impl Write, count: usize) -> std::io::Result<()> {
    writeln!(out, "{count}")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = cli().get_matches();
    let (input, ctx) = build_context(&matches)?;

    let articles = load_articles(&input)?;
    report_count(&mut std::io::stdout().lock(), articles.len())?;
    info!("Loaded {} article(s) from {input:?}", articles.len());

    let report = export(&ctx, &articles)?;
    for path in report.written_paths() {
        debug!("Exported {path:?}");
    }
    if !report.overwrites.is_empty() {
        info!(
            "{} article(s) replaced an earlier article with the same url",
            report.overwrites.len()
        );
    }
    if report.failed() > 0 {
        let urls: Vec<&str> = report.failures().map(|(url, _)| url).collect();
        bail!(
            "{} of {} article(s) could not be exported: {}",
            report.failed(),
            report.outcomes.len(),
            urls.join(", ")
        );
    }

    Ok(())
}
