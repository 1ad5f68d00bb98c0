use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Sentinel returned when no content selector matches anything on the page
pub const NO_CONTENT: &str = "No content found";

/// Extracts a page's main content as Markdown.
///
/// The content element is chosen by the first selector in
/// `content_selectors` that matches; when none does, the [`NO_CONTENT`]
/// sentinel is returned instead.
pub fn extract_page(doc: &Html, content_selectors: &[String]) -> String {
    match select_content(doc, content_selectors) {
        Some(root) => extract_markdown(root),
        None => NO_CONTENT.to_string(),
    }
}

/// Picks the main content element via the prioritized selector list
pub fn select_content<'a>(doc: &'a Html, selectors: &[String]) -> Option<ElementRef<'a>> {
    for raw in selectors {
        let selector = match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(_) => {
                ::log::warn!("Skipping unparseable content selector: {}", raw);
                continue;
            }
        };
        if let Some(element) = doc.select(&selector).next() {
            ::log::debug!("Content selector matched: {}", raw);
            return Some(element);
        }
    }
    None
}

/// Renders a content subtree into Markdown.
///
/// Output is grouped by element type in a fixed pass order (headings, then
/// paragraphs, lists, tables, code blocks) rather than interleaved by
/// document position. If no pass produces anything, the subtree's collapsed
/// text content is emitted as a single block.
pub fn extract_markdown(root: ElementRef) -> String {
    let mut out = String::new();

    render_headings(root, &mut out);
    render_paragraphs(root, &mut out);
    render_lists(root, &mut out);
    render_tables(root, &mut out);
    render_code_blocks(root, &mut out);

    if out.is_empty() {
        out = collapse_whitespace(&element_text(root));
    }

    out
}

/// Reads the document's `<title>` text, collapsed to a single line
pub fn document_title(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .next()
        .map(|title| collapse_whitespace(&element_text(title)))
}

fn render_headings(root: ElementRef, out: &mut String) {
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    for heading in root.select(&selector) {
        // element name is h1..h6, the digit is the heading level
        let level = (heading.value().name().as_bytes()[1] - b'0') as usize;
        let text = element_text(heading);
        out.push_str(&"#".repeat(level));
        out.push(' ');
        out.push_str(text.trim());
        out.push_str("\n\n");
    }
}

fn render_paragraphs(root: ElementRef, out: &mut String) {
    let selector = Selector::parse("p").unwrap();
    for paragraph in root.select(&selector) {
        out.push_str(element_text(paragraph).trim());
        out.push_str("\n\n");
    }
}

/// Every `ul`/`ol` in the subtree is rendered as its own list, nested ones
/// included. Item text flattens descendant text, so deeply nested
/// structures run together rather than indenting.
fn render_lists(root: ElementRef, out: &mut String) {
    let selector = Selector::parse("ul, ol").unwrap();
    for list in root.select(&selector) {
        let ordered = list.value().name() == "ol";
        let items = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li");

        for (index, item) in items.enumerate() {
            let text = element_text(item);
            if ordered {
                out.push_str(&format!("{}. {}\n", index + 1, text.trim()));
            } else {
                out.push_str(&format!("* {}\n", text.trim()));
            }
        }
        out.push('\n');
    }
}

/// The first `tr` is the header row; its `th` cells become the pipe-table
/// header. A table whose first row has no header cells renders as nothing.
fn render_tables(root: ElementRef, out: &mut String) {
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let header_selector = Selector::parse("th").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    for table in root.select(&table_selector) {
        let rows: Vec<ElementRef> = table.select(&row_selector).collect();
        let header_row = match rows.first() {
            Some(row) => *row,
            None => continue,
        };

        let header_cells: Vec<String> = header_row
            .select(&header_selector)
            .map(|cell| element_text(cell).trim().to_string())
            .collect();
        if header_cells.is_empty() {
            ::log::debug!("Skipping table without header cells in its first row");
            continue;
        }

        let mut header = String::from("| ");
        let mut separator = String::from("| ");
        for cell in &header_cells {
            header.push_str(cell);
            header.push_str(" | ");
            separator.push_str("--- | ");
        }
        out.push_str(&header);
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');

        for row in &rows[1..] {
            let mut line = String::from("| ");
            for cell in row.select(&cell_selector) {
                line.push_str(element_text(cell).trim());
                line.push_str(" | ");
            }
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
}

fn render_code_blocks(root: ElementRef, out: &mut String) {
    let selector = Selector::parse("pre code").unwrap();
    for block in root.select(&selector) {
        out.push_str("```\n");
        out.push_str(element_text(block).trim());
        out.push_str("\n```\n\n");
    }
}

/// Concatenated text of all descendant text nodes
fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Collapses runs of whitespace to single spaces and trims the ends
fn collapse_whitespace(text: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> String {
        let doc = Html::parse_document(html);
        let selector = Selector::parse("main").unwrap();
        let root = doc.select(&selector).next().expect("fixture has <main>");
        extract_markdown(root)
    }

    #[test]
    fn test_heading_fidelity() {
        let output = extract("<main><h2>Foo</h2></main>");
        assert_eq!(output, "## Foo\n\n");
    }

    #[test]
    fn test_all_heading_levels() {
        let output = extract("<main><h1>A</h1><h6>B</h6></main>");
        assert_eq!(output, "# A\n\n###### B\n\n");
    }

    #[test]
    fn test_paragraphs_trimmed() {
        let output = extract("<main><p>  Hello world  </p><p>Second</p></main>");
        assert_eq!(output, "Hello world\n\nSecond\n\n");
    }

    #[test]
    fn test_headings_grouped_before_paragraphs() {
        // group-by-type ordering: the h2 after the paragraph still renders first
        let output = extract("<main><p>Intro</p><h2>Title</h2></main>");
        assert_eq!(output, "## Title\n\nIntro\n\n");
    }

    #[test]
    fn test_unordered_list() {
        let output = extract("<main><ul><li>One</li><li>Two</li></ul></main>");
        assert_eq!(output, "* One\n* Two\n\n");
    }

    #[test]
    fn test_ordered_list_numbering_resets_per_list() {
        let output = extract(
            "<main><ol><li>A</li><li>B</li></ol><ol><li>C</li></ol></main>",
        );
        assert_eq!(output, "1. A\n2. B\n\n1. C\n\n");
    }

    #[test]
    fn test_nested_list_flattens_and_repeats() {
        // The nested ul renders twice: flattened inside its parent item, and
        // again as its own list.
        let output = extract(
            "<main><ul><li>Outer<ul><li>Inner</li></ul></li></ul></main>",
        );
        assert_eq!(output, "* OuterInner\n\n* Inner\n\n");
    }

    #[test]
    fn test_table_with_header() {
        let output = extract(
            "<main><table>\
             <tr><th>Name</th><th>Kind</th></tr>\
             <tr><td>url</td><td>string</td></tr>\
             </table></main>",
        );
        assert_eq!(
            output,
            "| Name | Kind | \n| --- | --- | \n| url | string | \n\n"
        );
    }

    #[test]
    fn test_table_without_header_cells_is_skipped() {
        let output = extract(
            "<main><table>\
             <tr><td>a</td><td>b</td></tr>\
             <tr><td>c</td><td>d</td></tr>\
             </table><p>After</p></main>",
        );
        assert_eq!(output, "After\n\n");
    }

    #[test]
    fn test_code_block() {
        let output = extract("<main><pre><code>let x = 1;\n</code></pre></main>");
        assert_eq!(output, "```\nlet x = 1;\n```\n\n");
    }

    #[test]
    fn test_fallback_when_no_structure() {
        let output = extract("<main><div>  Just   some\n\n text  </div></main>");
        assert_eq!(output, "Just some text");
    }

    #[test]
    fn test_fallback_not_used_when_structure_exists() {
        let output = extract("<main><p>Para</p><div>stray text</div></main>");
        assert_eq!(output, "Para\n\n");
    }

    #[test]
    fn test_idempotence() {
        let html = "<main><h1>T</h1><p>Body</p><ul><li>x</li></ul></main>";
        let doc = Html::parse_document(html);
        let selector = Selector::parse("main").unwrap();
        let root = doc.select(&selector).next().unwrap();
        assert_eq!(extract_markdown(root), extract_markdown(root));
    }

    #[test]
    fn test_selector_priority_first_match_wins() {
        let html = "<html><body>\
            <article><p>From article</p></article>\
            <main><p>From main</p></main>\
            </body></html>";
        let doc = Html::parse_document(html);
        let selectors: Vec<String> =
            vec!["main".to_string(), "article".to_string()];
        let root = select_content(&doc, &selectors).unwrap();
        assert_eq!(extract_markdown(root), "From main\n\n");
    }

    #[test]
    fn test_no_match_sentinel() {
        let doc = Html::parse_document("<html><body><p>text</p></body></html>");
        let selectors: Vec<String> = vec![".page-inner".to_string(), "main".to_string()];
        assert_eq!(extract_page(&doc, &selectors), NO_CONTENT);
    }

    #[test]
    fn test_unparseable_selector_is_skipped() {
        let doc = Html::parse_document("<html><body><main><p>ok</p></main></body></html>");
        let selectors: Vec<String> = vec!["[unclosed".to_string(), "main".to_string()];
        assert_eq!(extract_page(&doc, &selectors), "ok\n\n");
    }

    #[test]
    fn test_document_title() {
        let doc = Html::parse_document(
            "<html><head><title>  API  Reference </title></head><body></body></html>",
        );
        assert_eq!(document_title(&doc), Some("API Reference".to_string()));

        let untitled = Html::parse_document("<html><body></body></html>");
        assert_eq!(document_title(&untitled), None);
    }
}
