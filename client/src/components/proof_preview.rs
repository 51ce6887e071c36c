//! Proof-of-payment preview shared by the payment row and the detail modal.

#[cfg(test)]
#[path = "proof_preview_test.rs"]
mod proof_preview_test;

use leptos::prelude::*;

use crate::util::proof::{ProofKind, ProofSource};

pub const NO_PROOF_LABEL: &str = "No proof yet";
pub const OTHER_FILE_LABEL: &str = "File";

/// Where the preview is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewVariant {
    /// Small, non-interactive thumbnail in a table row.
    Row,
    /// Full-size embed in the detail modal.
    Modal,
}

impl PreviewVariant {
    /// `<object data=...>` for a PDF proof. Rows open the first page fitted
    /// to width; the modal embeds the plain URL.
    pub fn pdf_source(self, proof: &ProofSource) -> Option<String> {
        match self {
            Self::Row => proof.thumbnail_pdf_url(),
            Self::Modal => proof.url.clone().filter(|_| proof.kind == ProofKind::Pdf),
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Row => "proof proof--row",
            Self::Modal => "proof proof--modal",
        }
    }
}

#[component]
pub fn ProofPreview(proof: ProofSource, variant: PreviewVariant) -> impl IntoView {
    let class = variant.class();
    let url = proof.url.clone().unwrap_or_default();
    match proof.kind {
        ProofKind::Missing => view! { <span class=format!("{class} proof--missing")>{NO_PROOF_LABEL}</span> }.into_any(),
        ProofKind::Image => {
            let href = url.clone();
            view! {
                <a class=class href=href target="_blank" rel="noopener noreferrer">
                    <img class="proof__image" src=url alt="Proof of payment"/>
                </a>
            }
            .into_any()
        }
        ProofKind::Pdf => {
            let data = variant.pdf_source(&proof).unwrap_or(url);
            let style = (variant == PreviewVariant::Row).then_some("pointer-events: none;");
            view! {
                <object class=format!("{class} proof__pdf") data=data type="application/pdf" style=style>
                    {OTHER_FILE_LABEL}
                </object>
            }
            .into_any()
        }
        ProofKind::Other => view! {
            <a class=format!("{class} proof--other") href=url target="_blank" rel="noopener noreferrer">
                {OTHER_FILE_LABEL}
            </a>
        }
        .into_any(),
    }
}
