use crate::results::ExtractedPage;

/// Marker appended in place of a page that failed to load or extract
pub const FAILURE_MARKER: &str = "### ERROR: failed to process page\n\n---\n\n";

/// Append-only builder for the output Markdown document.
///
/// The document is a leading site title followed by one block per visited
/// page, each terminated by a horizontal-rule separator.
#[derive(Debug)]
pub struct MarkdownDoc {
    buffer: String,
    pages: usize,
}

impl MarkdownDoc {
    /// Start a document titled after the site
    pub fn new(site_title: &str) -> Self {
        Self {
            buffer: format!("# {}\n\n", site_title),
            pages: 0,
        }
    }

    /// Append one extracted page
    pub fn push_page(&mut self, page: &ExtractedPage) {
        self.buffer.push_str(&format!("## {}\n\n", page.title));
        self.buffer.push_str(&format!("URL: {}\n\n", page.url));
        self.buffer.push_str(&page.body);
        self.buffer.push_str("\n\n---\n\n");
        self.pages += 1;
    }

    /// Append the fixed marker for a page that could not be processed
    pub fn push_failure(&mut self) {
        self.buffer.push_str(FAILURE_MARKER);
    }

    /// Number of successfully appended pages
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Consume the builder and return the document text
    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_block() {
        let doc = MarkdownDoc::new("Example Docs");
        assert_eq!(doc.finish(), "# Example Docs\n\n");
    }

    #[test]
    fn test_page_block_layout() {
        let mut doc = MarkdownDoc::new("Example Docs");
        doc.push_page(&ExtractedPage::new(
            "Getting Started".to_string(),
            "https://docs.example.com/start".to_string(),
            "## Install\n\nRun the installer.\n\n".to_string(),
        ));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(
            doc.finish(),
            "# Example Docs\n\n\
             ## Getting Started\n\n\
             URL: https://docs.example.com/start\n\n\
             ## Install\n\nRun the installer.\n\n\n\n---\n\n"
        );
    }

    #[test]
    fn test_failure_marker() {
        let mut doc = MarkdownDoc::new("Example Docs");
        doc.push_failure();
        assert_eq!(doc.page_count(), 0);
        assert_eq!(
            doc.finish(),
            "# Example Docs\n\n### ERROR: failed to process page\n\n---\n\n"
        );
    }
}
