//! Server-side HTML rendering.
//!
//! Every page is a pure function of its inputs. Static copy lives in string
//! constants; anything that comes from the backend or from a visitor passes
//! through [`escape_html`] before it reaches the output.

pub mod legal;
pub mod pages;
pub mod shell;

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
