//! Shared fixtures for the integration tests.
//!
//! Fixtures are generated with lopdf instead of being checked in: every page
//! draws the text `<label> p<n>`, which [`fingerprint`] reads back to check
//! page count and page order of merged output.

use lopdf::{Document, Object, Stream, dictionary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An input root and an output root inside a scratch directory.
pub struct Workspace {
    _dir: TempDir,
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

impl Workspace {
    /// Create a workspace with an existing, empty input root.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_root = dir.path().join("pdfs");
        let output_root = dir.path().join("merged");
        fs::create_dir(&input_root).expect("Failed to create input root");
        Self {
            _dir: dir,
            input_root,
            output_root,
        }
    }

    /// Create a workspace whose input root does not exist.
    pub fn without_input_root() -> Self {
        let ws = Self::new();
        fs::remove_dir(&ws.input_root).expect("Failed to remove input root");
        ws
    }

    /// Create a company directory, returning its path.
    pub fn company(&self, name: &str) -> PathBuf {
        let dir = self.input_root.join(name);
        fs::create_dir_all(&dir).expect("Failed to create company dir");
        dir
    }

    /// Add a generated PDF of `pages` pages to a company.
    pub fn add_pdf(&self, company: &str, file: &str, pages: u32) -> PathBuf {
        let path = self.company(company).join(file);
        write_pdf(&path, &format!("{company}/{file}"), pages);
        path
    }

    /// Add a file that is not a valid PDF to a company.
    pub fn add_corrupt_pdf(&self, company: &str, file: &str) -> PathBuf {
        let path = self.company(company).join(file);
        fs::write(&path, b"definitely not a pdf").expect("Failed to write corrupt file");
        path
    }

    /// Path of the merged output for a company.
    pub fn output_for(&self, company: &str) -> PathBuf {
        self.output_root.join(format!("{company}_merged.pdf"))
    }
}

/// Write a document whose pages are labelled `<label> p1..pN`.
pub fn write_pdf(path: &Path, label: &str, pages: u32) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let content = format!("BT /F1 12 Tf 72 720 Td ({label} p{n}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            Object::Reference(doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            }))
        })
        .collect();

    // MediaBox and Resources live on the page tree root so merges must keep
    // inherited attributes; the unit test fixtures set them per page
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), 595.0.into(), 842.0.into()]),
            "Resources" => resources_id,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(path).expect("Failed to save fixture PDF");
}

/// Page count plus the label of every page, in order.
pub fn fingerprint(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("Failed to load output PDF");
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).unwrap_or_default();
            let text = String::from_utf8_lossy(&content).into_owned();
            text.split_once('(')
                .and_then(|(_, rest)| rest.split_once(')'))
                .map(|(label, _)| label.to_string())
                .unwrap_or_default()
        })
        .collect()
}
