//! Proof-of-payment file classification.
//!
//! Both the payment row and the detail modal render previews from
//! [`classify_proof`], so the two sites always agree on what is an image.

#[cfg(test)]
#[path = "proof_test.rs"]
mod proof_test;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// How a proof file can be previewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofKind {
    /// No proof uploaded.
    Missing,
    Image,
    Pdf,
    /// Uploaded, but in a format the browser cannot preview inline.
    Other,
}

/// A proof URL together with its preview kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofSource {
    pub kind: ProofKind,
    pub url: Option<String>,
}

impl ProofSource {
    pub fn from_url(url: Option<&str>) -> Self {
        let url = url.map(str::trim).filter(|u| !u.is_empty());
        Self { kind: classify_proof(url), url: url.map(str::to_owned) }
    }

    /// Source for an `<object>` preview in a list row: first page, fitted to
    /// width.
    pub fn thumbnail_pdf_url(&self) -> Option<String> {
        match (self.kind, &self.url) {
            (ProofKind::Pdf, Some(url)) => Some(format!("{url}#page=1&zoom=page-width")),
            _ => None,
        }
    }
}

/// Classify a proof URL by its file extension (case-insensitive, ignoring
/// any query string or fragment).
pub fn classify_proof(url: Option<&str>) -> ProofKind {
    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return ProofKind::Missing;
    };
    match extension(url).as_deref() {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => ProofKind::Image,
        Some("pdf") => ProofKind::Pdf,
        _ => ProofKind::Other,
    }
}

fn extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = file.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}
