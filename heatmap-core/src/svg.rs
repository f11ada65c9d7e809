//! SVG serialization of a [`Scene`].

use std::fmt::Write;

use crate::scene::{LabelKind, Scene};

const BACKGROUND: &str = "#ffffff";
const LABEL_COLOR: &str = "#57606a";
const FONT_FAMILY: &str = "-apple-system, Helvetica, Arial, sans-serif";
const FONT_SIZE: u32 = 12;
const CELL_RADIUS: u32 = 2;

impl Scene {
    /// Standalone SVG document sized exactly to the canvas.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, BACKGROUND
        );
        let _ = writeln!(
            svg,
            r#"  <g font-family="{}" font-size="{}" fill="{}">"#,
            FONT_FAMILY, FONT_SIZE, LABEL_COLOR
        );
        for label in &self.labels {
            let anchor = match label.kind {
                LabelKind::Weekday => "start",
                LabelKind::Month => "middle",
            };
            let _ = writeln!(
                svg,
                r#"    <text x="{}" y="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                label.x,
                label.y,
                anchor,
                escape_xml(label.text)
            );
        }
        let _ = writeln!(svg, "  </g>");

        for cell in &self.cells {
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{s}" height="{s}" rx="{r}" ry="{r}" fill="{}"><title>{}: {}</title></rect>"#,
                cell.x,
                cell.y,
                cell.bucket.color(),
                cell.date.format("%Y-%m-%d"),
                cell.count,
                s = cell.size,
                r = CELL_RADIUS,
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
