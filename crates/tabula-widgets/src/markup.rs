//! Small HTML building helpers.

use std::fmt::Write;

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Appends markup to a buffer.
///
/// Attribute values and text go through [`escape`]; [`Markup::raw`] does not.
#[derive(Debug, Default)]
pub(crate) struct Markup {
    buf: String,
}

impl Markup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Open `tag` with the given attributes. `None` values are skipped and
    /// empty values render as bare boolean attributes.
    pub(crate) fn open(&mut self, tag: &str, attrs: &[(&str, Option<&str>)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            match value {
                Some("") => {
                    let _ = write!(self.buf, " {name}");
                }
                Some(value) => {
                    let _ = write!(self.buf, " {name}=\"{}\"", escape(value));
                }
                None => {}
            }
        }
        self.buf.push('>');
        self
    }

    pub(crate) fn close(&mut self, tag: &str) -> &mut Self {
        let _ = write!(self.buf, "</{tag}>");
        self
    }

    pub(crate) fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub(crate) fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    /// `<tag attrs>text</tag>`
    pub(crate) fn element(
        &mut self,
        tag: &str,
        attrs: &[(&str, Option<&str>)],
        text: &str,
    ) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// Attribute value that is present only when `on` holds.
pub(crate) const fn flag(on: bool) -> Option<&'static str> {
    if on {
        Some("")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_markup_element_and_attrs() {
        let mut m = Markup::new();
        m.element(
            "button",
            &[
                ("class", Some("page")),
                ("disabled", flag(true)),
                ("title", None),
                ("data-page", Some("2")),
            ],
            "2 > 1",
        );
        assert_eq!(
            m.finish(),
            r#"<button class="page" disabled data-page="2">2 &gt; 1</button>"#
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let mut m = Markup::new();
        m.open("td", &[]).raw("<b>x</b>").close("td");
        assert_eq!(m.finish(), "<td><b>x</b></td>");
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_markup(s in ".*") {
            let escaped = escape(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }
    }
}
