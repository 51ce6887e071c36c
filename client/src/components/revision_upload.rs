//! File picker and submit button for a returned manuscript.

use leptos::html::Input;
use leptos::prelude::*;

use crate::net::api::UploadFile;

/// Extensions the picker offers.
pub const ACCEPTED_REVISION_TYPES: &str = ".docx";

/// The picker is bound to one manuscript; submitting hands the selected file
/// (if any) to `on_submit` together with that manuscript's id.
#[component]
pub fn RevisionUpload(manuscript_id: String, on_submit: Callback<(String, Option<UploadFile>)>) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let input_id = format!("revisionFile-{manuscript_id}");

    let on_click = move |_| {
        on_submit.run((manuscript_id.clone(), selected_file(input_ref)));
    };

    view! {
        <div class="revision-upload">
            <label for=input_id.clone() class="form-label">"Upload revision"</label>
            <div class="input-group">
                <input
                    node_ref=input_ref
                    id=input_id
                    type="file"
                    class="form-control"
                    accept=ACCEPTED_REVISION_TYPES
                />
                <button class="btn btn--warning" type="button" on:click=on_click>
                    "Upload"
                </button>
            </div>
            <small class="text-muted">"Format: docx"</small>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn selected_file(input: NodeRef<Input>) -> Option<UploadFile> {
    input.get_untracked()?.files()?.get(0)
}

#[cfg(not(feature = "hydrate"))]
fn selected_file(_input: NodeRef<Input>) -> Option<UploadFile> {
    None
}
