//! HTML tag cloud writer

use super::FontScale;
use crate::selection::RenderTable;
use std::io::{self, Write};

/// Stylesheet defining the `f11`..`f48` font size classes
pub const DEFAULT_STYLESHEET: &str = "https://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";

/// Local stylesheet linked after [`DEFAULT_STYLESHEET`] for overrides
pub const LOCAL_STYLESHEET: &str = "styles.css";

/// Stylesheets linked when none are configured
#[must_use]
pub fn default_stylesheets() -> Vec<String> {
    vec![DEFAULT_STYLESHEET.to_string(), LOCAL_STYLESHEET.to_string()]
}

/// Rendering options for the HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub scale: FontScale,
    /// Stylesheet links emitted in the document head, in order
    pub stylesheets: Vec<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            scale: FontScale::default(),
            stylesheets: default_stylesheets(),
        }
    }
}

/// Escape text for use in element content or a double-quoted attribute
///
/// # Examples
/// ```
/// use tag_cloud::render::escape_html;
///
/// assert_eq!(escape_html("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format a single word span
#[must_use]
pub fn format_span(word: &str, count: usize, font_size: u32) -> String {
    format!(
        "<span style=\"cursor:default\" class=\"f{font_size}\" title=\"count: {count}\">{}</span>",
        escape_html(word)
    )
}

/// Write the tag cloud document for `table`
///
/// `source_name` is the input file name shown in the title and heading.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_html<W: Write>(
    out: &mut W,
    table: &RenderTable,
    source_name: &str,
    options: &HtmlOptions,
) -> io::Result<()> {
    let heading = format!("Top {} words in {}", table.len(), escape_html(source_name));

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{heading}</title>")?;
    for stylesheet in &options.stylesheets {
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(stylesheet)
        )?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{heading}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;

    if let (Some(min_count), Some(max_count)) = (table.min_count(), table.max_count()) {
        for entry in table.entries() {
            let size = options.scale.size_for(entry.count, min_count, max_count);
            writeln!(out, "{}", format_span(&entry.word, entry.count, size))?;
        }
    }

    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

/// Render the tag cloud document into a `String`
///
/// # Panics
/// Will not panic - writes into a `Vec` are infallible and every piece of the
/// document comes from `str`.
#[must_use]
pub fn render_html(table: &RenderTable, source_name: &str, options: &HtmlOptions) -> String {
    let mut buf = Vec::new();
    write_html(&mut buf, table, source_name, options).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("document is built from str")
}
