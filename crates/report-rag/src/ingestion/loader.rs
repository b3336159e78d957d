//! Document loading with per-page boilerplate removal
//!
//! Supports PDF (page-by-page via lopdf, whole-document pdf-extract as a
//! fallback) plus plain text and Markdown. Every loaded page passes through
//! the boilerplate stripper before chunking.

use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::text::strip_boilerplate;

/// A page of extracted text
#[derive(Debug, Clone)]
pub struct LoadedPage {
    /// Page number (1-indexed), if known
    pub page: Option<u32>,
    /// Extracted text, already boilerplate-stripped
    pub text: String,
}

/// A loaded source document
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Filename used in citations
    pub filename: String,
    /// Pages in document order
    pub pages: Vec<LoadedPage>,
}

/// Load all supported documents under `dir`.
///
/// A directory with no supported files is a fatal error: index builds never
/// proceed on an empty corpus.
pub fn load_corpus(dir: &Path, boilerplate_markers: &[String]) -> Result<Vec<LoadedDocument>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let filename = entry.file_name().to_string_lossy().to_string();

        let pages = match extension.as_deref() {
            Some("pdf") => {
                tracing::info!("Loading PDF: {}", path.display());
                load_pdf(path)?
            }
            Some("txt") | Some("md") => {
                tracing::info!("Loading text file: {}", path.display());
                vec![LoadedPage {
                    page: None,
                    text: std::fs::read_to_string(path)?,
                }]
            }
            _ => continue,
        };

        let pages: Vec<LoadedPage> = pages
            .into_iter()
            .map(|p| LoadedPage {
                page: p.page,
                text: strip_boilerplate(&p.text, boilerplate_markers),
            })
            .filter(|p| !p.text.trim().is_empty())
            .collect();

        if pages.is_empty() {
            tracing::warn!("No usable text in {}, skipping", filename);
            continue;
        }

        documents.push(LoadedDocument { filename, pages });
    }

    if documents.is_empty() {
        return Err(Error::EmptyCorpus(format!(
            "no readable documents found under {}",
            dir.display()
        )));
    }

    Ok(documents)
}

/// Extract PDF text page by page, so chunks keep real page numbers for
/// citations. Falls back to whole-document extraction (page unknown) when
/// per-page extraction produces nothing.
fn load_pdf(path: &Path) -> Result<Vec<LoadedPage>> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let data = std::fs::read(path)?;

    let mut pages = Vec::new();
    match lopdf::Document::load_mem(&data) {
        Ok(document) => {
            for (page_number, _) in document.get_pages() {
                match document.extract_text(&[page_number]) {
                    Ok(text) if !text.trim().is_empty() => {
                        pages.push(LoadedPage {
                            page: Some(page_number),
                            text,
                        });
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::debug!("Could not extract page {} of {}: {}", page_number, filename, e);
                    }
                }
            }
        }
        Err(e) => {
            tracing::warn!("lopdf failed on {}: {}, trying pdf-extract", filename, e);
        }
    }

    if pages.is_empty() {
        let text = pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| Error::file_parse(&filename, e.to_string()))?;

        if text.trim().is_empty() {
            return Err(Error::file_parse(
                &filename,
                "no text content could be extracted",
            ));
        }

        pages.push(LoadedPage { page: None, text });
    }

    Ok(pages)
}
