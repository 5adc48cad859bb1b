use askama::Template;

use crate::document::ResolvedDocument;

#[derive(Template)]
#[template(path = "document.html")]
struct DocumentHtml<'a> {
    doc: &'a ResolvedDocument,
}

/// Renders the document as a standalone HTML page.
///
/// Text is HTML escaped except for notes, which may carry their own markup.
pub fn render(doc: &ResolvedDocument) -> askama::Result<String> {
    DocumentHtml { doc }.render()
}
