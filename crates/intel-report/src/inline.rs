//! Inlining of server-hosted images into free text.
//!
//! Documents reference images with Markdown link syntax pointing at
//! server-relative paths, e.g. `![chart](/rest/files/download/chart.png)`.
//! Those paths only resolve with credentials, so the rendered document
//! embeds the bytes as `data:` URIs instead.

use std::ops::Range;
use std::sync::LazyLock;

use base64::Engine;
use intelgraph_client::IntelGraphApi;
use regex::Regex;
use tracing::{debug, warn};

/// `](<path>)` where the path is server-relative (not `//host/...`) and names an image.
static ASSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\]\((/[^/)\s][^)\s]*\.(?i:png|jpe?g|gif))\)").expect("asset pattern compiles")
});

/// An asset path found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef<'t> {
    /// Byte range of the path, excluding the surrounding parentheses.
    pub span: Range<usize>,
    /// The server-relative path.
    pub path: &'t str,
}

/// All asset references in `text`, left to right, non-overlapping.
pub fn find_assets(text: &str) -> Vec<AssetRef<'_>> {
    ASSET_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| AssetRef {
            span: m.range(),
            path: m.as_str(),
        })
        .collect()
}

/// Rewrite each asset path with `handler`, left to right.
///
/// `None` from the handler keeps that path as it was. Text outside the
/// matched paths is copied unchanged.
pub fn rewrite_assets<F>(text: &str, mut handler: F) -> String
where
    F: FnMut(&AssetRef<'_>) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for asset in find_assets(text) {
        out.push_str(&text[last..asset.span.start]);
        match handler(&asset) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(asset.path),
        }
        last = asset.span.end;
    }

    out.push_str(&text[last..]);
    out
}

/// MIME type for an image path, by extension.
pub fn mime_type(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "image/png",
    }
}

/// Encode bytes as a `data:` URI.
pub fn data_uri(path: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type(path),
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Replace every asset path in `text` with an inline copy of the asset.
///
/// Each asset is fetched once per occurrence. A failed fetch leaves that
/// occurrence untouched and does not affect the others.
pub async fn inline_assets(api: &dyn IntelGraphApi, text: &str) -> String {
    let assets = find_assets(text);
    if assets.is_empty() {
        return text.to_string();
    }

    let mut replacements = Vec::with_capacity(assets.len());
    for asset in &assets {
        let replacement = match api.fetch_asset(asset.path).await {
            Ok(bytes) => {
                debug!("Inlined {} ({} bytes)", asset.path, bytes.len());
                Some(data_uri(asset.path, &bytes))
            }
            Err(e) => {
                warn!("Could not inline {}: {}", asset.path, e);
                None
            }
        };
        replacements.push(replacement);
    }

    let mut replacements = replacements.into_iter();
    rewrite_assets(text, |_| replacements.next().flatten())
}
