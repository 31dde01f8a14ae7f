use super::error::{download_failed_message, ApiError, PROCESS_FAILED_MESSAGE};
use contracts::usecases::u508_compare_rows::{DownloadType, ProcessReply, RowCounts};

/// Action currently waiting for the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Process,
    Download(DownloadType),
}

/// UI state of the comparison page.
///
/// The loading, results and error panels are shown and hidden independently,
/// but results and error are never visible at the same time. `counts` outlives
/// the results panel, so an error does not erase the last numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareState {
    pub loading: bool,
    pub results_visible: bool,
    pub error: Option<String>,
    pub counts: Option<RowCounts>,
    pub downloads_enabled: bool,
    pub busy: Option<Action>,
    pub log_text: String,
    download_failed: bool,
    log_seq: u64,
    log_applied: u64,
}

impl CompareState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        self.busy.is_none()
    }

    pub fn can_download(&self) -> bool {
        self.busy.is_none() && self.downloads_enabled
    }

    pub fn is_downloading(&self, kind: DownloadType) -> bool {
        self.busy == Some(Action::Download(kind))
    }

    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
        self.results_visible = false;
        self.error = None;
        self.download_failed = false;
    }

    pub fn show_results(&mut self, counts: RowCounts) {
        self.loading = false;
        self.error = None;
        self.results_visible = true;
        self.counts = Some(counts);
        self.downloads_enabled = true;
        self.download_failed = false;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.results_visible = false;
        self.error = Some(message.into());
        self.download_failed = false;
    }

    /// Replaces the whole log panel text
    pub fn set_log_text(&mut self, text: String) {
        self.log_text = text;
    }

    /// Marks a processing request as started. Returns `false` and leaves the
    /// state untouched while another action is in flight.
    pub fn begin_process(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.busy = Some(Action::Process);
        self.show_loading();
        true
    }

    /// Renders the `/process` result and returns the token of the log
    /// refresh that must follow it.
    pub fn apply_process_outcome(&mut self, outcome: &Result<ProcessReply, ApiError>) -> u64 {
        match outcome {
            Ok(ProcessReply::Counts(counts)) => self.show_results(*counts),
            Ok(ProcessReply::Rejected { error }) => self.show_error(error.clone()),
            Err(_) => self.show_error(PROCESS_FAILED_MESSAGE),
        }
        self.finish(Action::Process);
        self.begin_log_fetch()
    }

    /// Marks a download as started. Returns `false` while busy or before the
    /// first successful processing.
    pub fn begin_download(&mut self, kind: DownloadType) -> bool {
        if !self.can_download() {
            return false;
        }
        self.busy = Some(Action::Download(kind));
        true
    }

    /// Renders the download result and returns the token of the log refresh
    /// that must follow it. A successful retry clears the message left by an
    /// earlier failed download and brings the counts back.
    pub fn apply_download_outcome<E>(
        &mut self,
        kind: DownloadType,
        outcome: &Result<(), E>,
    ) -> u64 {
        match outcome {
            Err(_) => {
                self.show_error(download_failed_message(kind));
                self.download_failed = true;
            }
            Ok(()) if self.download_failed => {
                self.error = None;
                self.download_failed = false;
                self.results_visible = self.counts.is_some();
            }
            Ok(()) => {}
        }
        self.finish(Action::Download(kind));
        self.begin_log_fetch()
    }

    fn finish(&mut self, action: Action) {
        if self.busy == Some(action) {
            self.busy = None;
        }
    }

    /// Issues a token for a new `/logs` request
    pub fn begin_log_fetch(&mut self) -> u64 {
        self.log_seq += 1;
        self.log_seq
    }

    /// Applies fetched lines unless a newer fetch was already applied.
    /// Returns whether the panel changed.
    pub fn apply_logs(&mut self, token: u64, lines: &[String]) -> bool {
        if token <= self.log_applied {
            return false;
        }
        self.log_applied = token;
        self.set_log_text(lines.join("\n"));
        true
    }
}
