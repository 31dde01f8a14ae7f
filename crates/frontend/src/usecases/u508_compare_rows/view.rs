use super::view_model::CompareRowsViewModel;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_compare_rows::{
    CompareRows, DownloadType, RowCounts, FIELD_FILE_A, FIELD_FILE_B, FIELD_KEY_COLUMN,
};
use leptos::html;
use leptos::prelude::*;
use thaw::*;

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

fn download_button_id(kind: DownloadType) -> &'static str {
    match kind {
        DownloadType::NewRows => "download-new-rows",
        DownloadType::NonExistingRows => "download-non-existing-rows",
    }
}

#[component]
pub fn CompareRowsPage() -> impl IntoView {
    let vm = CompareRowsViewModel::new();
    let state = vm.state;
    let form_ref: NodeRef<html::Form> = NodeRef::new();

    // Лента логов при открытии страницы
    vm.refresh_logs();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form_ref.get_untracked() {
            Some(form) => vm.submit(&form),
            None => log::error!("upload-form is not mounted"),
        }
    };

    let on_download = move |kind: DownloadType| match form_ref.get_untracked() {
        Some(form) => vm.download(kind, &form),
        None => log::error!("upload-form is not mounted"),
    };

    let count_text = move |pick: fn(&RowCounts) -> u64| {
        move || {
            state.with(|s| {
                s.counts
                    .as_ref()
                    .map(|c| pick(c).to_string())
                    .unwrap_or_default()
            })
        }
    };

    view! {
        <div class="page compare-rows">
            <h2 class="page__title">{CompareRows::display_name()}</h2>

            <Card>
                <form id="upload-form" node_ref=form_ref on:submit=on_submit>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form-group">
                            <label for=FIELD_FILE_A>"File A"</label>
                            <input type="file" id=FIELD_FILE_A name=FIELD_FILE_A accept=".xlsx" required />
                        </div>
                        <div class="form-group">
                            <label for=FIELD_FILE_B>"File B"</label>
                            <input type="file" id=FIELD_FILE_B name=FIELD_FILE_B accept=".xlsx" required />
                        </div>
                        <div class="form-group">
                            <label for=FIELD_KEY_COLUMN>"Key column"</label>
                            <input type="text" id=FIELD_KEY_COLUMN name=FIELD_KEY_COLUMN required />
                        </div>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || !state.with(|s| s.can_submit())
                        >
                            "Process"
                        </button>
                    </Flex>
                </form>
            </Card>

            <div id="loading" style:display=move || display(state.with(|s| s.loading))>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Spinner />
                    <span>"Processing files..."</span>
                </Flex>
            </div>

            <div
                id="error"
                class="error-message"
                style:display=move || display(state.with(|s| s.error_visible()))
            >
                {move || state.with(|s| s.error.clone().unwrap_or_default())}
            </div>

            <div id="results" style:display=move || display(state.with(|s| s.results_visible))>
                <p>"New rows: " <strong id="new-rows-count">{count_text(|c| c.new_rows_count)}</strong></p>
                <p>
                    "Non-existing rows: "
                    <strong id="non-existing-rows-count">{count_text(|c| c.non_existing_rows_count)}</strong>
                </p>
            </div>

            <Flex gap=FlexGap::Small>
                {DownloadType::ALL
                    .into_iter()
                    .map(move |kind| {
                        view! {
                            <button
                                type="button"
                                id=download_button_id(kind)
                                class="button button--secondary"
                                disabled=move || !state.with(|s| s.can_download())
                                on:click=move |_| on_download(kind)
                            >
                                {move || {
                                    if state.with(|s| s.is_downloading(kind)) {
                                        "Downloading..."
                                    } else {
                                        kind.label()
                                    }
                                }}
                            </button>
                        }
                    })
                    .collect_view()}
            </Flex>

            <Card>
                <h3>"Logs"</h3>
                <pre id="log-content" class="log-content">
                    {move || state.with(|s| s.log_text.clone())}
                </pre>
            </Card>
        </div>
    }
}
