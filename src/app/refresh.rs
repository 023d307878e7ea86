//! Data refresh operations (reload from git)

use super::state::App;

impl App {
    /// Reload the commit log, keeping the current filter
    ///
    /// Entries that fail to parse are skipped and reported as a warning.
    pub fn refresh_log(&mut self) {
        match self
            .git
            .log_commits(self.config.profile, self.config.max_count)
        {
            Ok(parsed) => {
                tracing::info!(
                    commits = parsed.commits.len(),
                    skipped = parsed.skipped.len(),
                    "log loaded"
                );
                if !parsed.skipped.is_empty() {
                    self.notify_warning(format!(
                        "Skipped {} malformed log entries",
                        parsed.skipped.len()
                    ));
                }
                self.log_view.set_commits(parsed.commits);
                self.log_view.branch = self.git.current_branch().ok();
                self.error_message = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load log");
                self.error_message = Some(format!("git error: {}", e));
            }
        }
    }

    /// Reload on user request (r / Ctrl+L)
    pub(crate) fn execute_refresh(&mut self) {
        self.notification = None;
        self.refresh_log();
        if self.error_message.is_none() && self.notification.is_none() {
            let count = self.log_view.commits.len();
            self.notify_info(format!("Reloaded {} commits", count));
        }
    }

    /// Fast-forward from upstream, then reload
    pub(crate) fn execute_pull(&mut self) {
        match self.git.pull() {
            Ok(output) => {
                tracing::info!(output = %output.trim(), "pull finished");
                self.notification = None;
                self.refresh_log();
                if self.error_message.is_none() && self.notification.is_none() {
                    if output.contains("Already up to date") {
                        self.notify_info("Already up to date");
                    } else {
                        self.notify_success("Pulled latest commits");
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "pull failed");
                self.error_message = Some(format!("git pull failed: {}", e));
            }
        }
    }
}
