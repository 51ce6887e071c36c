//! Author manuscripts page state, status badges, and detail view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workflow (Draft -> Review -> Approved | Returned, Returned -> Review
//! after a revision upload) is owned by the server. This module only mirrors
//! the reported status and decides when the revision upload is offered.

#[cfg(test)]
#[path = "manuscripts_test.rs"]
mod manuscripts_test;

use crate::net::error::ApiError;
use crate::net::types::{Manuscript, StoredFile, UserRef};
use crate::util::format::{MISSING, format_date, format_flag, text_or_missing};

pub const LOADING_MESSAGE: &str = "Loading manuscripts...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load manuscripts.";
pub const AUTHOR_UNAVAILABLE: &str = "Not available";
pub const NO_REVISION_FILE_MESSAGE: &str = "No revision file from reviewer yet";
pub const NO_HISTORY_MESSAGE: &str = "No upload history yet";
pub const NO_BACK_COVER_MESSAGE: &str = "Back cover not uploaded yet";

// =============================================================================
// STATUS
// =============================================================================

/// Server-reported workflow status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManuscriptStatus {
    Draft,
    Review,
    Approved,
    Returned,
    Other(String),
}

impl ManuscriptStatus {
    /// Missing status reads as `Draft`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("" | "Draft") => Self::Draft,
            Some("Review") => Self::Review,
            Some("Approved") => Self::Approved,
            Some("Returned") => Self::Returned,
            Some(other) => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Warning,
    Success,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "bg-secondary",
            Self::Warning => "bg-warning",
            Self::Success => "bg-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

/// Badge for a status/label pair. The server's label may be localized
/// (`Disetujui` for approved), so both fields are consulted.
pub fn status_badge(status: Option<&str>, label: Option<&str>) -> StatusBadge {
    let status = status.map(str::trim).filter(|s| !s.is_empty());
    let label = label.map(str::trim).filter(|s| !s.is_empty());
    let either = |value: &str| status == Some(value) || label == Some(value);

    let tone = if either("Draft") {
        BadgeTone::Neutral
    } else if either("Review") {
        BadgeTone::Warning
    } else if either("Approved") || label == Some("Disetujui") {
        BadgeTone::Success
    } else {
        BadgeTone::Neutral
    };
    let text = label.or(status).unwrap_or("Draft");
    StatusBadge { label: text.to_owned(), tone }
}

/// The revision note is shown whenever either field says `Returned`.
fn is_returned(m: &Manuscript) -> bool {
    m.status.as_deref() == Some("Returned") || m.status_label.as_deref() == Some("Returned")
}

/// The upload control keys off `status` alone.
pub fn can_upload_revision(m: &Manuscript) -> bool {
    ManuscriptStatus::parse(m.status.as_deref()) == ManuscriptStatus::Returned
}

// =============================================================================
// LIST
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManuscriptRow {
    pub id: String,
    pub title: String,
    pub series: String,
    pub badge: StatusBadge,
    pub revision_count: u32,
    pub created_label: String,
}

impl ManuscriptRow {
    pub fn from_manuscript(m: &Manuscript) -> Self {
        Self {
            id: m.id.clone(),
            title: text_or_missing(m.title.as_deref()),
            series: text_or_missing(m.series_name.as_deref()),
            badge: status_badge(m.status.as_deref(), m.status_label.as_deref()),
            revision_count: m.revision_count.unwrap_or(0),
            created_label: format_date(m.created_at.as_deref()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ManuscriptListView {
    #[default]
    Loading,
    /// The author has no manuscripts yet: show the upload form.
    FirstUse,
    Failed,
    Table(Vec<ManuscriptRow>),
}

impl ManuscriptListView {
    pub fn build(result: Result<Vec<Manuscript>, ApiError>) -> Self {
        match result {
            Ok(list) if list.is_empty() => Self::FirstUse,
            Ok(list) => Self::Table(list.iter().map(ManuscriptRow::from_manuscript).collect()),
            Err(err) => {
                log::error!("load manuscripts failed: {err}");
                Self::Failed
            }
        }
    }
}

// =============================================================================
// DETAIL
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionEntry {
    /// 1-based version number.
    pub number: usize,
    pub uploaded_label: String,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManuscriptDetailView {
    pub id: String,
    pub title: String,
    pub badge: StatusBadge,
    pub created_label: String,
    pub updated_label: String,
    pub cover_front: Option<String>,
    pub cover_back: Option<String>,
    /// Label/value pairs for the info grid, in display order.
    pub info: Vec<(&'static str, String)>,
    pub description: String,
    pub revision_note: Option<String>,
    pub author_info: String,
    pub author_id: String,
    pub revision_file_url: Option<String>,
    pub versions: Vec<VersionEntry>,
    pub can_upload_revision: bool,
}

fn first_url(files: &[StoredFile]) -> Option<String> {
    files
        .first()
        .and_then(|f| f.url.as_deref())
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_owned)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

impl ManuscriptDetailView {
    pub fn from_manuscript(m: &Manuscript) -> Self {
        let revision_count = m.revision_count.map_or_else(|| MISSING.to_owned(), |n| n.to_string());
        let info = vec![
            ("ISBN", text_or_missing(m.isbn.as_deref())),
            ("Year", text_or_missing(m.publish_year.as_deref())),
            ("Revisions", revision_count),
            ("Status step", text_or_missing(m.status_step.as_deref())),
            ("Perpusnas", format_flag(m.is_uploaded_to_perpusnas).to_owned()),
            ("Published", format_flag(m.is_published).to_owned()),
            ("Illustration", format_flag(m.has_illustration).to_owned()),
            ("Manuscript ID", m.id.clone()),
        ];

        let author_info = match m.author.as_ref() {
            Some(UserRef::Object(user)) => format!(
                "{} ({})",
                text_or_missing(user.fullname.as_deref()),
                text_or_missing(user.email.as_deref())
            ),
            _ => AUTHOR_UNAVAILABLE.to_owned(),
        };

        let versions = m
            .files
            .manuscripts
            .iter()
            .enumerate()
            .map(|(i, file)| VersionEntry {
                number: i + 1,
                uploaded_label: format_date(file.uploaded_at.as_deref()),
                url: non_blank(file.url.as_deref()),
            })
            .collect();

        Self {
            id: m.id.clone(),
            title: text_or_missing(m.title.as_deref()),
            badge: status_badge(m.status.as_deref(), m.status_label.as_deref()),
            created_label: format_date(m.created_at.as_deref()),
            updated_label: format_date(m.updated_at.as_deref()),
            cover_front: first_url(&m.files.cover_front),
            cover_back: first_url(&m.files.cover_back),
            info,
            description: text_or_missing(m.description.as_deref()),
            revision_note: if is_returned(m) { non_blank(m.revision_note.as_deref()) } else { None },
            author_info,
            author_id: text_or_missing(m.author.as_ref().and_then(UserRef::id)),
            revision_file_url: non_blank(m.revision_file_url.as_deref()),
            versions,
            can_upload_revision: can_upload_revision(m),
        }
    }
}

/// Page-scoped state for the author manuscripts page.
#[derive(Clone, Debug, Default)]
pub struct ManuscriptsState {
    pub list: ManuscriptListView,
    /// Expanded card; when set it replaces the table.
    pub detail: Option<ManuscriptDetailView>,
    /// A list or detail request is in flight.
    pub loading: bool,
}
