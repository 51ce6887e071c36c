//! Expanded manuscript card: covers, info grid, version history, and the
//! revision upload for returned manuscripts.

use leptos::prelude::*;

use crate::components::revision_upload::RevisionUpload;
use crate::components::status_badge::StatusBadgeView;
use crate::net::api::UploadFile;
use crate::state::manuscripts::{
    ManuscriptDetailView, NO_BACK_COVER_MESSAGE, NO_HISTORY_MESSAGE, NO_REVISION_FILE_MESSAGE,
};

#[component]
pub fn ManuscriptDetail(
    detail: ManuscriptDetailView,
    on_back: Callback<()>,
    on_upload: Callback<(String, Option<UploadFile>)>,
) -> impl IntoView {
    let ManuscriptDetailView {
        id,
        title,
        badge,
        created_label,
        updated_label,
        cover_front,
        cover_back,
        info,
        description,
        revision_note,
        author_info,
        author_id,
        revision_file_url,
        versions,
        can_upload_revision,
    } = detail;

    let banner = cover_front.map(|url| {
        view! { <img class="manuscript-card__banner" src=url alt="Front cover"/> }
    });

    let upload = can_upload_revision.then(|| {
        view! { <RevisionUpload manuscript_id=id on_submit=on_upload/> }
    });

    let note = revision_note.map(|note| {
        view! {
            <div class="alert alert--warning">
                <strong>"Revision note"</strong>
                <p>{note}</p>
            </div>
        }
    });

    let reviewer_file = match revision_file_url {
        Some(url) => view! {
            <a class="btn btn--small" href=url target="_blank" rel="noopener noreferrer">
                "Download reviewer file"
            </a>
        }
        .into_any(),
        None => view! { <p class="text-muted">{NO_REVISION_FILE_MESSAGE}</p> }.into_any(),
    };

    let history = if versions.is_empty() {
        view! { <p class="text-muted">{NO_HISTORY_MESSAGE}</p> }.into_any()
    } else {
        view! {
            <ul class="version-list">
                {versions
                    .into_iter()
                    .map(|version| {
                        view! {
                            <li class="version-list__item">
                                <span>{format!("Version {} ({})", version.number, version.uploaded_label)}</span>
                                {version.url.map(|url| view! {
                                    <a class="btn btn--small" href=url target="_blank" rel="noopener noreferrer">"Open"</a>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let back_cover = match cover_back {
        Some(url) => view! { <img class="manuscript-card__cover" src=url alt="Back cover"/> }.into_any(),
        None => view! { <p class="text-muted">{NO_BACK_COVER_MESSAGE}</p> }.into_any(),
    };

    view! {
        <article class="card manuscript-card">
            {banner}
            <div class="manuscript-card__body">
                <button class="btn btn--link" on:click=move |_| on_back.run(())>"Back to list"</button>
                <StatusBadgeView badge=badge/>
                <h2 class="manuscript-card__title">{title}</h2>
                <p class="text-muted">{format!("Created {created_label}")}</p>

                {upload}

                <section class="manuscript-card__section">
                    <h3>"Manuscript information"</h3>
                    <dl class="info-grid">
                        {info
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                </section>

                <section class="manuscript-card__section">
                    <h3>"Description"</h3>
                    <p>{description}</p>
                </section>

                {note}

                <section class="manuscript-card__section">
                    <h3>"Author"</h3>
                    <p>{author_info}</p>
                </section>

                <section class="manuscript-card__section">
                    <h3>"Reviewer revision file"</h3>
                    {reviewer_file}
                </section>

                <section class="manuscript-card__section">
                    <h3>"Upload history"</h3>
                    {history}
                </section>

                <section class="manuscript-card__section">
                    <h3>"Back cover"</h3>
                    {back_cover}
                </section>

                <section class="manuscript-card__section manuscript-card__meta">
                    <h3>"System"</h3>
                    <p>{format!("Created: {created_label}")}</p>
                    <p>{format!("Updated: {updated_label}")}</p>
                    <p>{format!("Author ID: {author_id}")}</p>
                </section>
            </div>
        </article>
    }
}
