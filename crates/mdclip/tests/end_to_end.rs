use mdclip::{
    parse_document, parse_html, ConverterOptions, MarkdownConverter, Selection,
    CONVERSION_ERROR_TEXT,
};

fn convert(html: &str) -> String {
    MarkdownConverter::new().convert_to_markdown(&parse_html(html), None)
}

fn convert_page(html: &str, url: &str) -> String {
    MarkdownConverter::with_options(ConverterOptions::for_page(url))
        .convert_to_markdown(&parse_document(html), None)
}

#[test]
fn heading_padding_survives_newline_collapse() {
    // `\n\n` after the heading plus `\n` before the paragraph: three newlines stay
    assert_eq!(
        convert("<h1>Title</h1><p>Hello <strong>world</strong></p>"),
        "# Title\n\n\nHello **world**"
    );
}

#[test]
fn dead_link_is_dropped() {
    assert_eq!(convert(r##"<a href="#">click</a>"##), "");
    assert_eq!(convert("<a>click</a>"), "");
    assert_eq!(convert(r#"<a href="/x"></a>"#), "");
}

#[test]
fn relative_link_resolves_against_page() {
    assert_eq!(
        convert_page(r#"<a href="/docs">Docs</a>"#, "https://example.com/x/y"),
        "[Docs](https://example.com/docs)"
    );
    assert_eq!(
        convert_page(r#"<a href="../up">Up</a>"#, "https://example.com/x/y/z"),
        "[Up](https://example.com/x/up)"
    );
    assert_eq!(
        convert_page(r#"<a href="//cdn.example.com/a">CDN</a>"#, "https://example.com/x/y"),
        "[CDN](//cdn.example.com/a)"
    );
}

#[test]
fn excess_newlines_collapse_to_three() {
    let result = convert("<h1>A</h1><h2>B</h2>");
    assert_eq!(result, "# A\n\n\n## B");
    assert!(!result.contains("\n\n\n\n"));
}

#[test]
fn nav_content_never_leaks() {
    let html = r#"
        <div>
          <section>
            <nav><p>Secret</p></nav>
            <p>Public</p>
          </section>
          <div class="menu"><p>Secret</p></div>
          <div role="navigation"><p>Secret</p></div>
          <div style="display: none"><p>Secret</p></div>
          <p hidden>Secret</p>
        </div>"#;
    let result = convert(html);
    assert_eq!(result, "Public");
}

#[test]
fn preformatted_text_keeps_lines() {
    let result = convert("<pre>line1\nline2</pre>");
    assert!(result.contains("```\nline1\nline2\n```"));
}

#[test]
fn code_block_without_raw_newlines_uses_layout() {
    let result = convert("<pre><div>let a = 1;</div><div>let b = 2;</div></pre>");
    assert_eq!(result, "```\nlet a = 1;\nlet b = 2;\n```");
}

#[test]
fn first_main_content_match_wins() {
    let html = r#"<!DOCTYPE html>
        <html><head><title>T</title><style>p { color: red }</style></head>
        <body>
          <header><h1>Site</h1></header>
          <article>
            <h2>Post</h2>
            <ul><li>One</li><li>Two</li></ul>
            <blockquote>Quoted <em>words</em></blockquote>
          </article>
          <div id="content"><p>Later</p></div>
          <footer>Bye</footer>
        </body></html>"#;
    assert_eq!(
        convert_page(html, "https://example.com/post"),
        "## Post\n\n\n- One\n- Two\n\n> Quoted words"
    );
}

#[test]
fn body_is_used_without_main_content() {
    let html = "<html><body><p>Only <code>body</code></p><script>alert(1)</script></body></html>";
    assert_eq!(convert_page(html, "https://example.com/"), "Only `body`");
}

#[test]
fn void_elements_without_children_are_dropped() {
    assert_eq!(convert("<p>a<br>b</p>"), "a b");
    assert_eq!(convert(r#"<p><img src="/pic.png" alt="Pic"></p>"#), "");
}

#[test]
fn selection_replaces_page() {
    let page = parse_document("<main><p>Whole page</p></main>");
    let range = parse_html("<li>first</li><li><b>second</b></li>");
    let converter = MarkdownConverter::new();

    let selection = Selection::new("first second", Some(&range));
    let result = converter.convert_to_markdown(&page, Some(selection));
    assert_eq!(result, "- first\n- **second**");

    let result = converter.convert_to_markdown(&page, Some(Selection::text_only("just text")));
    assert_eq!(result, "just text");
}

#[test]
fn failed_conversion_degrades_to_text() {
    let mut html = String::new();
    for _ in 0..40 {
        html.push_str("<div>");
    }
    html.push_str("deep");

    let options = ConverterOptions {
        max_depth: 8,
        ..Default::default()
    };
    let converter = MarkdownConverter::with_options(options);
    let page = parse_document(&html);

    assert_eq!(converter.convert_to_markdown(&page, None), CONVERSION_ERROR_TEXT);
    assert_eq!(
        converter.convert_to_markdown(&page, Some(Selection::new("picked", Some(&page)))),
        "picked"
    );
}

#[test]
fn deep_markup_degrades_to_error_text() {
    let html = format!("{}deep", "<div>".repeat(20_000));
    let page = parse_document(&html);

    let result = MarkdownConverter::new().convert_to_markdown(&page, None);
    assert_eq!(result, CONVERSION_ERROR_TEXT);
}

#[test]
fn table_cells_render_as_pipes() {
    let html = "<table><tr><th>Name</th><th>Age</th></tr><tr><td>Ann</td><td>30</td></tr></table>";
    assert_eq!(convert(html), "| **Name** | **Age**\n| Ann | 30");
}
