// Copyright 2025 the Quintessence Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-file HTML report holding one inline SVG per chart.

use crate::svg::escape_xml;

/// One titled chart in the report.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) svg: String,
}

impl HtmlSection {
    pub(crate) fn new(title: impl Into<String>, svg: String) -> Self {
        Self {
            title: title.into(),
            svg,
        }
    }
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(concat!(
        "<style>\n",
        "body { font-family: system-ui, sans-serif; background: #f9fafb; margin: 2rem; }\n",
        ".grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 1.5rem; }\n",
        ".card { background: #fff; border: 1px solid #f3f4f6; border-radius: 1rem; padding: 1.5rem; }\n",
        ".card h3 { margin: 0 0 1rem; font-size: 1.1rem; color: #111827; }\n",
        ".card svg { max-width: 100%; height: auto; }\n",
        "</style>\n</head>\n<body>\n",
    ));
    out.push_str(&format!("<h1>{}</h1>\n<div class=\"grid\">\n", escape_xml(title)));
    for section in sections {
        out.push_str("<section class=\"card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape_xml(&section.title)));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_wraps_each_section_in_a_card() {
        let sections = [
            HtmlSection::new("Traffic", "<svg></svg>\n".to_string()),
            HtmlSection::new("Q&A", "<svg></svg>\n".to_string()),
        ];
        let html = render_report("Analytics", &sections);
        assert_eq!(html.matches("<section class=\"card\">").count(), 2);
        assert!(html.contains("<h3>Q&amp;A</h3>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
