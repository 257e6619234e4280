//! Tag cloud rendering
//!
//! Font scaling and the static HTML document.

mod font;
mod html;

pub use font::{FONT_MAX, FONT_MIN, FontScale};
pub use html::{
    DEFAULT_STYLESHEET, HtmlOptions, LOCAL_STYLESHEET, default_stylesheets, escape_html,
    format_span, render_html, write_html,
};
