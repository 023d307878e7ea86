//! Application state

use std::path::Path;

use crate::config::Config;
use crate::git::GitExecutor;
use crate::model::Notification;
use crate::ui::views::LogView;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Effective configuration
    pub config: Config,
    /// Log view state
    pub log_view: LogView,
    /// git executor
    pub git: GitExecutor,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
}

impl App {
    /// Construct a new instance of [`App`] and load the initial log.
    pub fn new(config: Config) -> Self {
        let mut log_view = LogView::new(config.filter_labels.clone());
        log_view.repo_name = repo_display_name(&config.repo_path);

        let mut app = Self {
            running: true,
            git: GitExecutor::with_repo_path(config.repo_path.clone()),
            config,
            log_view,
            error_message: None,
            notification: None,
        };

        app.refresh_log();

        app
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }

    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }
}

/// Directory name of the repository, skipping a trailing `.git`
fn repo_display_name(path: &Path) -> String {
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let dir = match resolved.file_name() {
        Some(name) if name == ".git" => resolved.parent().unwrap_or(&resolved),
        _ => &resolved,
    };

    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
