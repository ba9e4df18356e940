//! The output page: headings and drawing surfaces, appended in render order.

use crate::error::Result;
use std::fs;
use std::path::Path;

use super::util::escape_html;

/// One heading plus the surface drawn under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub container_id: String,
    /// Complete `<svg>` element; its root tag carries `id="{container_id}"`.
    pub svg: String,
}

/// Append-only list of chart sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, container_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.container_id == container_id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Self-contained HTML page with one `<h1>` + `<svg>` pair per section.
    pub fn to_html(&self) -> String {
        const HEAD: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Working time</title>
<style>
  body { font-family: sans-serif; }
  svg { display: block; }
</style>
</head>
<body>
"#;
        const TAIL: &str = "</body>\n</html>\n";

        let mut out = String::from(HEAD);
        for s in &self.sections {
            out.push_str("<h1>");
            out.push_str(&escape_html(&s.heading));
            out.push_str("</h1>\n");
            out.push_str(s.svg.trim());
            out.push('\n');
        }
        out.push_str(TAIL);
        out
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), self.to_html())?;
        log::info!(
            "wrote {} chart section(s) to {}",
            self.sections.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Tag the root `<svg>` element with `id`.
pub(crate) fn with_container_id(svg: &str, id: &str) -> String {
    match svg.find("<svg") {
        Some(at) => {
            let insert_at = at + "<svg".len();
            let mut out = String::with_capacity(svg.len() + id.len() + 6);
            out.push_str(&svg[..insert_at]);
            out.push_str(" id=\"");
            out.push_str(&escape_html(id));
            out.push('"');
            out.push_str(&svg[insert_at..]);
            out
        }
        None => svg.to_string(),
    }
}
