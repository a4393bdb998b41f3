//! # Document Head Rendering
//!
//! Turns [`SiteMetadata`] into `<title>`/`<meta>` tags and splices them into the
//! Trunk-built `index.html`. Link-preview crawlers never run the wasm bundle, so the
//! tags have to be in the HTML as served.

use std::fmt::Write as _;

use shared::SiteMetadata;

/// Escape text for use in element content and double-quoted attributes.
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

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(out, r#"<meta name="{}" content="{}" />"#, name, escape_html(content));
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(out, r#"<meta property="{}" content="{}" />"#, property, escape_html(content));
}

/// Render the head tags. `site_url` replaces the static `og:url`.
pub fn render_head(meta: &SiteMetadata, site_url: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<title>{}</title>", escape_html(meta.title));
    meta_name(&mut out, "description", meta.description);

    let og = &meta.open_graph;
    meta_property(&mut out, "og:title", og.title);
    meta_property(&mut out, "og:description", og.description);
    meta_property(&mut out, "og:url", site_url);
    meta_property(&mut out, "og:site_name", og.site_name);
    meta_property(&mut out, "og:locale", og.locale);
    meta_property(&mut out, "og:type", og.kind);
    for image in og.images {
        meta_property(&mut out, "og:image", image);
    }

    let twitter = &meta.twitter;
    meta_name(&mut out, "twitter:card", twitter.card);
    meta_name(&mut out, "twitter:title", twitter.title);
    meta_name(&mut out, "twitter:description", twitter.description);
    for image in twitter.images {
        meta_name(&mut out, "twitter:image", image);
    }

    out
}

/// Bare document used when no built `index.html` is available.
pub fn fallback_document(head: &str, lang: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\" />\n{}</head>\n<body></body>\n</html>\n",
        escape_html(lang),
        head
    )
}

/// Byte offset of the first `</head>` in `lowered` that is not inside a comment or a
/// `<script>` element.
fn find_head_close(lowered: &str) -> Option<usize> {
    let mut pos = 0;
    loop {
        let rest = &lowered[pos..];
        let next = ["<!--", "<script", "</head>"]
            .iter()
            .filter_map(|marker| rest.find(marker).map(|at| (at, *marker)))
            .min_by_key(|(at, _)| *at)?;

        let start = pos + next.0;
        match next.1 {
            "</head>" => return Some(start),
            "<!--" => pos = start + lowered[start..].find("-->")? + "-->".len(),
            _ => pos = start + lowered[start..].find("</script>")? + "</script>".len(),
        }
    }
}

/// Insert `head` just before `</head>` and give a bare `<html>` tag its `lang`.
///
/// Documents without a closing head tag, or whose only one sits inside an unclosed
/// comment or script, are replaced by [`fallback_document`].
pub fn inject_head(document: &str, head: &str, lang: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `document`
    let lowered = document.to_ascii_lowercase();
    let Some(head_end) = find_head_close(&lowered) else {
        return fallback_document(head, lang);
    };

    let mut out = String::with_capacity(document.len() + head.len() + 16);
    out.push_str(&document[..head_end]);
    out.push_str(head);
    out.push_str(&document[head_end..]);

    if let Some(html_start) = out.to_ascii_lowercase().find("<html>") {
        out.replace_range(
            html_start..html_start + "<html>".len(),
            &format!("<html lang=\"{}\">", escape_html(lang)),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SITE_METADATA;

    #[test]
    fn test_render_head_has_title_and_cards() {
        let head = render_head(&SITE_METADATA, "https://showfari.ca");
        assert!(head.contains("<title>Showfari — Discover Toronto’s Scene</title>"));
        assert!(head.contains(
            r#"<meta name="description" content="Join Showfari’s beta and explore Toronto’s live music community." />"#
        ));
        assert!(head.contains(r#"<meta property="og:url" content="https://showfari.ca" />"#));
        assert!(head.contains(r#"<meta property="og:locale" content="en_CA" />"#));
        assert!(head.contains(r#"<meta property="og:type" content="website" />"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary" />"#));
        assert!(!head.contains("og:image"));
        assert!(!head.contains("twitter:image"));
    }

    #[test]
    fn test_site_url_overrides_og_url() {
        let head = render_head(&SITE_METADATA, "https://staging.showfari.ca");
        assert!(head.contains(r#"content="https://staging.showfari.ca""#));
        assert!(!head.contains(r#"content="https://showfari.ca""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("Toronto’s"), "Toronto’s");
    }

    #[test]
    fn test_inject_before_head_close() {
        let doc = "<!DOCTYPE html>\n<html lang=\"en\">\n<HEAD><meta charset=\"utf-8\" /></HEAD><body></body></html>";
        let out = inject_head(doc, "<title>T</title>", "en");
        assert!(out.contains("<meta charset=\"utf-8\" /><title>T</title></HEAD>"));
    }

    #[test]
    fn test_inject_skips_head_close_in_comment_and_script() {
        let doc = "<html lang=\"en\"><head><!-- moved </head> here --><script>let s = '</head>';</script></head><body></body></html>";
        let out = inject_head(doc, "<title>T</title>", "en");
        assert!(out.contains("<!-- moved </head> here -->"));
        assert!(out.contains("'</head>';</script><title>T</title></head><body>"));
    }

    #[test]
    fn test_inject_with_only_commented_head_close_falls_back() {
        let out = inject_head("<html><head><!-- </head>", "<title>T</title>", "en");
        assert!(out.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_inject_sets_missing_lang() {
        let out = inject_head("<html><head></head><body></body></html>", "", "en");
        assert!(out.starts_with("<html lang=\"en\"><head>"));
    }

    #[test]
    fn test_inject_without_head_falls_back() {
        let out = inject_head("<p>not a document</p>", "<title>T</title>", "en");
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>T</title>"));
        assert!(!out.contains("not a document"));
    }
}
