use std::path::Path;
use std::time::UNIX_EPOCH;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
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

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Last-modified footer for a page file, or empty when the mtime cannot be
/// read or formatted.
pub fn last_modified_html(path: &Path) -> String {
    let Ok(mtime) = std::fs::metadata(path).and_then(|m| m.modified()) else {
        return String::new();
    };
    let Ok(elapsed) = mtime.duration_since(UNIX_EPOCH) else {
        return String::new();
    };
    let Ok(datetime) = OffsetDateTime::from_unix_timestamp(elapsed.as_secs() as i64) else {
        return String::new();
    };
    match datetime.format(&Rfc3339) {
        Ok(s) => format!("<p class=\"meta\">Last modified: {}</p>", escape_html(&s)),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn missing_file_has_no_footer() {
        assert_eq!(last_modified_html(Path::new("/nonexistent/page.txt")), "");
    }

    #[test]
    fn footer_formats_mtime_as_rfc3339() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Page.txt");
        std::fs::write(&path, "x").unwrap();
        let footer = last_modified_html(&path);
        assert!(footer.starts_with("<p class=\"meta\">Last modified: "));
        assert!(footer.contains('T'));
    }
}
