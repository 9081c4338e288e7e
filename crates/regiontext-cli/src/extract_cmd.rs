use std::io::{self, Write};
use std::path::Path;

use regiontext_core::{
    ExtractOptions, PageExtraction, RegionExtractor, Tolerance, UnicodeNorm, UserRegion,
    WordProvider,
};
use tracing::warn;

use crate::cli::OutputFormat;
use crate::document::open_document;
use crate::regions::{collect_regions, load_regions_file};
use crate::report::{link_action, page_header, result_line};
use crate::shared::{ProgressReporter, csv_escape, open_output, resolve_pages, write_failed};

/// Arguments of the `extract` subcommand.
pub struct ExtractRequest<'a> {
    pub file: &'a Path,
    pub pages: Option<&'a str>,
    pub regions: &'a [UserRegion],
    pub regions_file: Option<&'a Path>,
    pub tolerance: Option<Tolerance>,
    pub link_tolerance: Option<Tolerance>,
    pub unicode_norm: UnicodeNorm,
    pub parallel: bool,
    pub format: &'a OutputFormat,
    pub output: Option<&'a Path>,
}

pub fn run(request: &ExtractRequest<'_>) -> Result<(), i32> {
    let doc = open_document(request.file)?;
    let file_regions = match request.regions_file {
        Some(path) => load_regions_file(path)?,
        None => Vec::new(),
    };
    let regions = collect_regions(request.regions, request.tolerance, file_regions);
    let page_indices = resolve_pages(request.pages, doc.page_count())?;

    let extractor = RegionExtractor::new(ExtractOptions {
        link_tolerance: request.link_tolerance.unwrap_or(Tolerance::LINK),
        unicode_norm: request.unicode_norm,
    });

    let progress = ProgressReporter::new("Extracting", page_indices.len());
    let mut pages = Vec::with_capacity(page_indices.len());
    for (i, &idx) in page_indices.iter().enumerate() {
        progress.report(i + 1);

        let page = if request.parallel {
            extractor.extract_page_parallel(idx, &regions, &doc, &doc)
        } else {
            extractor.extract_page(idx, &regions, &doc, &doc)
        }
        .map_err(|e| {
            progress.finish();
            eprintln!("Error extracting page {}: {e}", idx + 1);
            1
        })?;

        for warning in &page.warnings {
            warn!("{warning}");
        }
        pages.push(page);
    }
    progress.finish();

    let mut out = open_output(request.output)?;
    match request.format {
        OutputFormat::Text => write_text(&mut out, &pages),
        OutputFormat::Json => write_json(&mut out, &pages),
        OutputFormat::Csv => write_csv(&mut out, &pages),
    }
    .and_then(|()| out.flush())
    .map_err(write_failed)?;

    eprintln!("Processed {} pages.", pages.len());
    Ok(())
}

fn write_text<W: Write + ?Sized>(out: &mut W, pages: &[PageExtraction]) -> io::Result<()> {
    for page in pages {
        writeln!(out, "{}", page_header(page))?;
        for result in &page.results {
            writeln!(out, "{}", result_line(result))?;
        }
    }
    Ok(())
}

fn write_json<W: Write + ?Sized>(out: &mut W, pages: &[PageExtraction]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, pages)?;
    writeln!(out)
}

fn write_csv<W: Write + ?Sized>(out: &mut W, pages: &[PageExtraction]) -> io::Result<()> {
    writeln!(
        out,
        "page,kind,index,label,action,destination,left,bottom,right,top,words,text"
    )?;

    for page in pages {
        for result in &page.results {
            let region = &result.region;
            let (kind, action, destination) = match link_action(region) {
                Some(action) => ("link", action.kind().as_str(), action.destination()),
                None => ("user", "", String::new()),
            };
            writeln!(
                out,
                "{},{},{},{},{},{},{:.2},{:.2},{:.2},{:.2},{},{}",
                page.page_number,
                kind,
                region.ordinal,
                csv_escape(&region.label),
                csv_escape(action),
                csv_escape(&destination),
                region.rect.left,
                region.rect.bottom,
                region.rect.right,
                region.rect.top,
                result.word_count,
                csv_escape(&result.text),
            )?;
        }
    }
    Ok(())
}
