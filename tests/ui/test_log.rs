//! Snapshot tests for the Log View and the app chrome
//!
//! Uses insta + ratatui TestBackend for visual regression testing.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use gitmon::app::App;
use gitmon::config::{Config, DEFAULT_FILTER_LABELS};
use gitmon::model::{CommitFilter, CommitRecord, Notification};
use gitmon::ui::views::LogView;

/// Helper: create a CommitRecord with a fixed date
fn make_commit(id: &str, author: &str, message: &str, refs: &[&str]) -> CommitRecord {
    CommitRecord {
        short_id: id.to_string(),
        date: "2024-01-02".to_string(),
        author: author.to_string(),
        message: message.to_string(),
        refs: refs.iter().map(|r| r.to_string()).collect(),
    }
}

fn default_view() -> LogView {
    let mut view = LogView::new(DEFAULT_FILTER_LABELS.iter().map(|s| s.to_string()).collect());
    view.repo_name = "tracking".to_string();
    view
}

fn sample_commits() -> Vec<CommitRecord> {
    vec![
        make_commit("abc1234", "Jane Doe", "Fix bug", &["HEAD -> main"]),
        make_commit("def5678", "Python", "Add parser", &[]),
        make_commit("0123abc", "Jane Doe", "Initial commit", &[]),
    ]
}

fn render_view(view: &mut LogView, notification: Option<&Notification>) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal
        .draw(|frame| {
            view.render(frame, frame.area(), notification);
        })
        .unwrap();
    terminal
}

#[test]
fn test_log_view_empty() {
    let mut view = default_view();
    let terminal = render_view(&mut view, None);

    assert_snapshot!(terminal.backend());
}

#[test]
fn test_log_view_with_commits() {
    let mut view = default_view();
    view.branch = Some("main".to_string());
    view.set_commits(sample_commits());
    let terminal = render_view(&mut view, None);

    assert_snapshot!(terminal.backend());
}

#[test]
fn test_log_view_filtered_by_author() {
    let mut view = default_view();
    view.set_commits(sample_commits());
    view.set_filter(CommitFilter::from_label("Jane Doe"));
    let terminal = render_view(&mut view, None);

    assert_snapshot!(terminal.backend());
}

#[test]
fn test_log_view_filter_without_matches() {
    let mut view = default_view();
    view.set_commits(sample_commits());
    view.set_filter(CommitFilter::from_label("Java"));
    let terminal = render_view(&mut view, None);

    assert_snapshot!(terminal.backend());
}

#[test]
fn test_log_view_with_notification() {
    let mut view = default_view();
    view.branch = Some("main".to_string());
    view.set_commits(sample_commits());
    let notification = Notification::info("Reloaded 3 commits");
    let terminal = render_view(&mut view, Some(&notification));

    assert_snapshot!(terminal.backend());
}

#[test]
fn test_app_error_banner() {
    // Error banner sits on the table's bottom border, status bar on the last row
    let config = Config {
        repo_path: "/nonexistent/gitmon".into(),
        ..Config::default()
    };
    let mut app = App::new(config);

    let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    assert_snapshot!(terminal.backend());
}
