//! Writing a scene to disk as SVG or PNG

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use heatmap_core::Scene;
use resvg::tiny_skia;
use resvg::usvg::{Options, Tree, fontdb};

/// Write `scene` to `path`: SVG text for a `.svg` path, PNG otherwise.
pub fn write_output(scene: &Scene, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory at {}", parent.display()))?;
    }

    let svg = scene.to_svg();

    if is_svg(path) {
        std::fs::write(path, svg)
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
    } else {
        render_png(&svg, path)?;
    }

    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Rasterize SVG text to a PNG file at its declared size
fn render_png(svg: &str, path: &Path) -> Result<()> {
    let mut fonts = fontdb::Database::new();
    fonts.load_system_fonts();

    let mut options = Options::default();
    options.fontdb = Arc::new(fonts);

    let tree = Tree::from_str(svg, &options).context("Failed to parse heatmap SVG")?;

    let size = tree.size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width().ceil() as u32, size.height().ceil() as u32)
        .context("Failed to create pixmap")?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .with_context(|| format!("Failed to save PNG to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_core::{DateCount, Year};

    fn scene() -> Scene {
        Scene::render(&DateCount::default(), &Year::new(2024).unwrap())
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("out/heatmap.svg")));
        assert!(is_svg(Path::new("HEATMAP.SVG")));
        assert!(!is_svg(Path::new("heatmap.png")));
        assert!(!is_svg(Path::new("heatmap")));
    }

    #[test]
    fn test_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("heatmap.svg");

        write_output(&scene(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
    }

    #[test]
    fn test_writes_png_at_canvas_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap.png");

        write_output(&scene(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        // IHDR width and height follow the signature and chunk header.
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        assert_eq!((width, height), (1260, 170));
    }
}
