//! Test helpers shared by the unit tests.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Build a minimal document with `pages` pages.
///
/// Every page's content stream draws the text `<label> p<n>`, so merged output
/// can be checked page by page with [`page_markers`].
///
/// MediaBox and Resources are set on each page here. The integration fixtures
/// put them on the page tree root instead, so the two together cover both
/// direct and inherited page attributes.
pub(crate) fn build_test_document(label: &str, pages: u32) -> Document {
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

    let mut kids = Vec::new();
    for n in 1..=pages {
        let content = format!("BT /F1 12 Tf 72 720 Td ({label} p{n}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), 595.0.into(), 842.0.into()]),
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc
}

/// Write a test document produced by [`build_test_document`] to `path`.
pub(crate) fn create_test_pdf(path: &Path, label: &str, pages: u32) -> std::io::Result<()> {
    let mut doc = build_test_document(label, pages);
    let mut file = File::create(path)?;
    doc.save_to(&mut file).map_err(std::io::Error::other)?;
    file.flush()
}

/// The `<label> p<n>` marker of every page, in page order.
pub(crate) fn page_markers(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| marker_of(doc, page_id))
        .collect()
}

fn marker_of(doc: &Document, page_id: ObjectId) -> String {
    let content = doc.get_page_content(page_id).unwrap_or_default();
    let text = String::from_utf8_lossy(&content);
    text.split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(marker, _)| marker.to_string())
        .unwrap_or_default()
}
