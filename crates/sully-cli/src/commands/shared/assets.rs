use std::path::Path;

use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sully_core::entities::Asset;

/// Read attachment files into base64 assets.
pub fn load_assets(paths: &[String]) -> anyhow::Result<Vec<Asset>> {
    paths.iter().map(|p| load_asset(Path::new(p))).collect()
}

fn load_asset(path: &Path) -> anyhow::Result<Asset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read asset {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(Asset {
        mime_type: mime_for(path).to_string(),
        name,
        data: STANDARD.encode(bytes),
    })
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "txt" | "md" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loads_and_encodes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Deck.PDF");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let assets = load_assets(&[path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "Deck.PDF");
        assert_eq!(assets[0].mime_type, "application/pdf");
        assert_eq!(assets[0].payload(), "JVBERi0xLjQ=");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_assets(&["/nonexistent/brochure.png".to_string()]).unwrap_err();
        assert!(err.to_string().contains("brochure.png"));
    }
}
