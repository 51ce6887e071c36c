//! Author manuscripts workflows: list, detail, revision upload.

#[cfg(test)]
#[path = "manuscripts_test.rs"]
mod manuscripts_test;

use crate::net::api::ManuscriptsApi;
use crate::state::manuscripts::{ManuscriptDetailView, ManuscriptListView};
use crate::state::notice::Notice;

pub const MISSING_FILE_MESSAGE: &str = "Please choose a revision file first.";
pub const UPLOADING_TITLE: &str = "Uploading revision...";
pub const UPLOADED_TITLE: &str = "Revision uploaded";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload revision";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load manuscript detail";

pub async fn load_manuscript_view<A: ManuscriptsApi>(api: &A) -> ManuscriptListView {
    ManuscriptListView::build(api.list_my_manuscripts().await)
}

/// Fetch one manuscript for the expanded card.
pub async fn load_manuscript_detail<A: ManuscriptsApi>(
    api: &A,
    manuscript_id: &str,
) -> Result<ManuscriptDetailView, Notice> {
    match api.fetch_manuscript(manuscript_id).await {
        Ok(manuscript) => Ok(ManuscriptDetailView::from_manuscript(&manuscript)),
        Err(err) => {
            log::error!("load manuscript {manuscript_id} failed: {err}");
            Err(Notice::error(err.user_message(DETAIL_FAILED_MESSAGE)))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Nothing was picked; no request was sent.
    MissingFile,
    Uploaded,
    /// Message to show in the error notice.
    Failed(String),
}

impl UploadOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            Self::MissingFile => Notice::warning(MISSING_FILE_MESSAGE),
            Self::Uploaded => Notice::success(UPLOADED_TITLE),
            Self::Failed(message) => Notice::error(message.clone()),
        }
    }
}

/// Upload a revision for `manuscript_id`. Without a file this returns
/// [`UploadOutcome::MissingFile`] and sends nothing.
pub async fn submit_revision<A: ManuscriptsApi>(
    api: &A,
    manuscript_id: &str,
    file: Option<A::File>,
) -> UploadOutcome {
    let Some(file) = file else {
        return UploadOutcome::MissingFile;
    };
    match api.reupload_manuscript(manuscript_id, file).await {
        Ok(()) => {
            log::info!("revision uploaded for manuscript {manuscript_id}");
            UploadOutcome::Uploaded
        }
        Err(err) => {
            log::error!("revision upload for {manuscript_id} failed: {err}");
            UploadOutcome::Failed(err.user_message(UPLOAD_FAILED_MESSAGE))
        }
    }
}
