use std::path::Path;

use regiontext_core::{AnnotationAdapter, Region, RegionRegistry, Tolerance, WordProvider};

use crate::cli::OutputFormat;
use crate::document::{PageDocument, open_document};
use crate::report::link_action;
use crate::shared::{ProgressReporter, csv_escape, resolve_pages};

pub fn run(file: &Path, pages: Option<&str>, format: &OutputFormat) -> Result<(), i32> {
    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;
    let progress = ProgressReporter::new("Reading links on", page_indices.len());

    let result = match format {
        OutputFormat::Text => write_text(&doc, &page_indices, &progress),
        OutputFormat::Json => write_json(&doc, &page_indices, &progress),
        OutputFormat::Csv => write_csv(&doc, &page_indices, &progress),
    };
    progress.finish();
    result
}

/// Link regions of one page, validated the same way `extract` sees them.
fn page_links(doc: &PageDocument, idx: usize) -> Result<Vec<Region>, i32> {
    doc.link_annotations(idx)
        .and_then(|links| RegionRegistry::for_page(&[], links, Tolerance::LINK))
        .map(|registry| registry.iter().cloned().collect())
        .map_err(|e| {
            eprintln!("Error reading links on page {}: {e}", idx + 1);
            1
        })
}

fn action_fields(region: &Region) -> (&'static str, String) {
    link_action(region)
        .map(|action| (action.kind().as_str(), action.destination()))
        .unwrap_or(("n/a", String::new()))
}

fn write_text(
    doc: &PageDocument,
    page_indices: &[usize],
    progress: &ProgressReporter,
) -> Result<(), i32> {
    println!("page\tindex\taction\tdestination\tleft\tbottom\tright\ttop\ttitle");

    for (i, &idx) in page_indices.iter().enumerate() {
        progress.report(i + 1);

        for link in page_links(doc, idx)? {
            let (action, destination) = action_fields(&link);
            println!(
                "{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{}",
                idx + 1,
                link.ordinal,
                action,
                destination,
                link.rect.left,
                link.rect.bottom,
                link.rect.right,
                link.rect.top,
                link.label,
            );
        }
    }

    Ok(())
}

fn link_to_json(link: &Region, page_num: usize) -> serde_json::Value {
    let (action, destination) = action_fields(link);
    serde_json::json!({
        "page": page_num,
        "index": link.ordinal,
        "title": link.label,
        "action": action,
        "destination": destination,
        "left": link.rect.left,
        "bottom": link.rect.bottom,
        "right": link.rect.right,
        "top": link.rect.top,
    })
}

fn write_json(
    doc: &PageDocument,
    page_indices: &[usize],
    progress: &ProgressReporter,
) -> Result<(), i32> {
    let mut all_links = Vec::new();

    for (i, &idx) in page_indices.iter().enumerate() {
        progress.report(i + 1);

        for link in page_links(doc, idx)? {
            all_links.push(link_to_json(&link, idx + 1));
        }
    }

    let json_str = serde_json::to_string(&all_links).map_err(|e| {
        eprintln!("Error: failed to serialize links: {e}");
        1
    })?;
    println!("{json_str}");

    Ok(())
}

fn write_csv(
    doc: &PageDocument,
    page_indices: &[usize],
    progress: &ProgressReporter,
) -> Result<(), i32> {
    println!("page,index,action,destination,left,bottom,right,top,title");

    for (i, &idx) in page_indices.iter().enumerate() {
        progress.report(i + 1);

        for link in page_links(doc, idx)? {
            let (action, destination) = action_fields(&link);
            println!(
                "{},{},{},{},{:.2},{:.2},{:.2},{:.2},{}",
                idx + 1,
                link.ordinal,
                csv_escape(action),
                csv_escape(&destination),
                link.rect.left,
                link.rect.bottom,
                link.rect.right,
                link.rect.top,
                csv_escape(&link.label),
            );
        }
    }

    Ok(())
}
