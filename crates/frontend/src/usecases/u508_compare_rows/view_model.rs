use super::api;
use super::state::CompareState;
use contracts::usecases::u508_compare_rows::{DownloadType, ProcessReply, XLSX_MIME};
use crate::shared::export;
use leptos::prelude::*;
use web_sys::HtmlFormElement;

/// ViewModel for the comparison page
///
/// Owns the page state and runs the three server calls. The view hands in the
/// form element; nothing here looks elements up by id.
#[derive(Clone, Copy)]
pub struct CompareRowsViewModel {
    pub state: RwSignal<CompareState>,
}

impl CompareRowsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CompareState::new()),
        }
    }

    /// Reload the log panel from `/logs`
    pub fn refresh_logs(&self) {
        let mut token = 0;
        self.state.update(|s| token = s.begin_log_fetch());
        self.fetch_logs(token);
    }

    fn fetch_logs(&self, token: u64) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_logs().await {
                Ok(lines) => state.update(|s| {
                    if s.apply_logs(token, &lines) {
                        log::debug!("Log panel refreshed: {} lines", lines.len());
                    } else {
                        log::debug!("Dropped stale log response #{}", token);
                    }
                }),
                Err(e) => log::warn!("Error fetching logs: {}", e.diagnostic()),
            }
        });
    }

    /// Send the form to `/process` and render the reply
    pub fn submit(&self, form: &HtmlFormElement) {
        let mut started = false;
        self.state.update(|s| started = s.begin_process());
        if !started {
            log::warn!("Submit ignored: another request is in flight");
            return;
        }

        let form_data = api::form_data(form);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Submitting files for processing");
            let outcome = match form_data {
                Ok(data) => api::process(data).await,
                Err(e) => Err(e),
            };

            match &outcome {
                Ok(ProcessReply::Counts(c)) => log::info!(
                    "Processing finished: {} new rows, {} non-existing rows",
                    c.new_rows_count,
                    c.non_existing_rows_count
                ),
                Ok(ProcessReply::Rejected { error }) => {
                    log::error!("Server returned an error: {}", error)
                }
                Err(e) => log::error!("Processing request failed: {}", e.diagnostic()),
            }

            let mut token = 0;
            vm.state.update(|s| token = s.apply_process_outcome(&outcome));
            vm.fetch_logs(token);
        });
    }

    /// Re-send the form with `download_type` and save the returned spreadsheet
    pub fn download(&self, kind: DownloadType, form: &HtmlFormElement) {
        let mut started = false;
        self.state.update(|s| started = s.begin_download(kind));
        if !started {
            log::warn!("Download of {} ignored: not available right now", kind);
            return;
        }

        let form_data = api::form_data(form);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Requesting {}", kind.file_name());
            let outcome = match form_data {
                Ok(data) => match api::download(data, kind).await {
                    Ok(bytes) => export::save_bytes(&bytes, kind.file_name(), XLSX_MIME),
                    Err(e) => Err(e.diagnostic()),
                },
                Err(e) => Err(e.diagnostic()),
            };

            match &outcome {
                Ok(()) => log::info!("Saved {}", kind.file_name()),
                Err(detail) => log::error!("Download error ({}): {}", kind, detail),
            }

            let mut token = 0;
            vm.state.update(|s| token = s.apply_download_outcome(kind, &outcome));
            vm.fetch_logs(token);
        });
    }
}

impl Default for CompareRowsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
