use super::*;
use crate::net::types::{ManuscriptFiles, UserStub};

fn manuscript(status: &str) -> Manuscript {
    Manuscript {
        id: "m1".to_owned(),
        title: Some("Laut Bercerita".to_owned()),
        series_name: None,
        status: Some(status.to_owned()),
        revision_count: Some(1),
        created_at: Some("2025-01-10T08:00:00Z".to_owned()),
        updated_at: Some("2025-02-01T08:00:00Z".to_owned()),
        ..Manuscript::default()
    }
}

// =============================================================
// Badges
// =============================================================

#[test]
fn badge_tones_follow_four_way_mapping() {
    assert_eq!(status_badge(Some("Draft"), None).tone, BadgeTone::Neutral);
    assert_eq!(status_badge(Some("Review"), None).tone, BadgeTone::Warning);
    assert_eq!(status_badge(Some("Approved"), None).tone, BadgeTone::Success);
    assert_eq!(status_badge(Some("Returned"), None).tone, BadgeTone::Neutral);
    assert_eq!(status_badge(Some("Archived"), None).tone, BadgeTone::Neutral);
}

#[test]
fn badge_prefers_label_text_and_recognizes_localized_approval() {
    let badge = status_badge(Some("Approved"), Some("Disetujui"));
    assert_eq!(badge, StatusBadge { label: "Disetujui".to_owned(), tone: BadgeTone::Success });
    assert_eq!(status_badge(Some("Other"), Some("Disetujui")).tone, BadgeTone::Success);
}

#[test]
fn badge_label_falls_back_to_status_then_draft() {
    assert_eq!(status_badge(Some("Review"), Some("  ")).label, "Review");
    assert_eq!(status_badge(None, None).label, "Draft");
}

#[test]
fn badge_css_classes() {
    assert_eq!(BadgeTone::Neutral.css_class(), "bg-secondary");
    assert_eq!(BadgeTone::Warning.css_class(), "bg-warning");
    assert_eq!(BadgeTone::Success.css_class(), "bg-success");
}

#[test]
fn status_parse_handles_known_and_unknown() {
    assert_eq!(ManuscriptStatus::parse(None), ManuscriptStatus::Draft);
    assert_eq!(ManuscriptStatus::parse(Some("Returned")), ManuscriptStatus::Returned);
    assert_eq!(ManuscriptStatus::parse(Some("Printing")), ManuscriptStatus::Other("Printing".to_owned()));
}

// =============================================================
// List
// =============================================================

#[test]
fn empty_list_is_first_use() {
    assert_eq!(ManuscriptListView::build(Ok(Vec::new())), ManuscriptListView::FirstUse);
}

#[test]
fn failed_list_is_failed() {
    let view = ManuscriptListView::build(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(view, ManuscriptListView::Failed);
}

#[test]
fn rows_fill_defaults() {
    let mut m = manuscript("Review");
    m.revision_count = None;
    let ManuscriptListView::Table(rows) = ManuscriptListView::build(Ok(vec![m])) else {
        panic!("expected table");
    };
    assert_eq!(rows[0].title, "Laut Bercerita");
    assert_eq!(rows[0].series, "-");
    assert_eq!(rows[0].revision_count, 0);
    assert_eq!(rows[0].created_label, "10 Jan 2025");
    assert_eq!(rows[0].badge.tone, BadgeTone::Warning);
}

// =============================================================
// Detail
// =============================================================

#[test]
fn upload_offered_only_when_returned() {
    assert!(ManuscriptDetailView::from_manuscript(&manuscript("Returned")).can_upload_revision);
    for status in ["Draft", "Review", "Approved"] {
        assert!(!ManuscriptDetailView::from_manuscript(&manuscript(status)).can_upload_revision, "{status}");
    }
}

#[test]
fn upload_ignores_returned_label_alone() {
    let mut m = manuscript("Review");
    m.status_label = Some("Returned".to_owned());
    assert!(!can_upload_revision(&m));
}

#[test]
fn revision_note_shown_only_when_returned() {
    let mut returned = manuscript("Returned");
    returned.revision_note = Some("Fix chapter 3".to_owned());
    let mut review = manuscript("Review");
    review.revision_note = Some("Fix chapter 3".to_owned());
    assert_eq!(
        ManuscriptDetailView::from_manuscript(&returned).revision_note.as_deref(),
        Some("Fix chapter 3")
    );
    assert_eq!(ManuscriptDetailView::from_manuscript(&review).revision_note, None);
}

#[test]
fn detail_lists_versions_and_covers() {
    let mut m = manuscript("Review");
    m.files = ManuscriptFiles {
        manuscripts: vec![
            StoredFile { url: Some("https://cdn.example.com/v1.docx".to_owned()), uploaded_at: Some("2025-01-10".to_owned()) },
            StoredFile { url: Some("https://cdn.example.com/v2.docx".to_owned()), uploaded_at: None },
        ],
        cover_front: vec![StoredFile { url: Some("https://cdn.example.com/front.jpg".to_owned()), uploaded_at: None }],
        cover_back: Vec::new(),
    };
    let view = ManuscriptDetailView::from_manuscript(&m);
    assert_eq!(view.versions.len(), 2);
    assert_eq!(view.versions[0].number, 1);
    assert_eq!(view.versions[0].uploaded_label, "10 Jan 2025");
    assert_eq!(view.versions[1].uploaded_label, "-");
    assert_eq!(view.cover_front.as_deref(), Some("https://cdn.example.com/front.jpg"));
    assert_eq!(view.cover_back, None);
}

#[test]
fn detail_author_info_and_flags() {
    let mut m = manuscript("Approved");
    m.author = Some(UserRef::Object(UserStub {
        id: Some("u7".to_owned()),
        email: Some("dewi@example.com".to_owned()),
        fullname: Some("Dewi".to_owned()),
    }));
    m.is_published = true;
    let view = ManuscriptDetailView::from_manuscript(&m);
    assert_eq!(view.author_info, "Dewi (dewi@example.com)");
    assert_eq!(view.author_id, "u7");
    assert!(view.info.contains(&("Published", "Yes".to_owned())));
    assert!(view.info.contains(&("Illustration", "No".to_owned())));
    assert!(view.info.contains(&("Manuscript ID", "m1".to_owned())));
}

#[test]
fn detail_without_author_is_not_available() {
    let view = ManuscriptDetailView::from_manuscript(&manuscript("Draft"));
    assert_eq!(view.author_info, AUTHOR_UNAVAILABLE);
    assert_eq!(view.author_id, "-");
    assert_eq!(view.description, "-");
    assert_eq!(view.revision_file_url, None);
}
