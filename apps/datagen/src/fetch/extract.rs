use scraper::{ElementRef, Html, Selector};

/// Pulls readable paragraph text out of a page.
///
/// Prefers the first `<article>` element's paragraphs (joined with single
/// newlines); when an article yields no text, falls back to every `<body>`
/// paragraph (empties dropped, joined with blank lines). Returns an empty
/// string when the page has no paragraph text at all.
pub fn extract_text_from_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let article_selector = Selector::parse("article").expect("static selector");
    let paragraph_selector = Selector::parse("p").expect("static selector");

    if let Some(article) = document.select(&article_selector).next() {
        let text = article
            .select(&paragraph_selector)
            .map(paragraph_text)
            .collect::<Vec<_>>()
            .join("\n");
        if !text.trim().is_empty() {
            return text;
        }
    }

    let body_selector = Selector::parse("body p").expect("static selector");
    let paragraphs: Vec<String> = document
        .select(&body_selector)
        .map(paragraph_text)
        .filter(|p| !p.is_empty())
        .collect();
    paragraphs.join("\n\n")
}

/// Text of one paragraph element: text nodes joined with spaces, trimmed.
fn paragraph_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
