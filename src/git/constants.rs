//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const PULL: &str = "pull";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Global flag, must precede the subcommand
    pub const NO_PAGER: &str = "--no-pager";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Print dates as YYYY-MM-DD
    pub const DATE_SHORT: &str = "--date=short";
    /// Prefix for the custom pretty format
    pub const PRETTY_FORMAT_PREFIX: &str = "--pretty=format:";
    /// Limit the number of commits
    pub const MAX_COUNT: &str = "-n";
    /// Short symbolic name (rev-parse)
    pub const ABBREV_REF: &str = "--abbrev-ref";
    /// Refuse anything but a fast-forward (pull)
    pub const FF_ONLY: &str = "--ff-only";
}

/// Special git values
pub mod special {
    /// Symbolic name of the checked-out commit
    pub const HEAD: &str = "HEAD";

    /// Environment variable that stops git from prompting for credentials
    pub const TERMINAL_PROMPT_ENV: &str = "GIT_TERMINAL_PROMPT";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// Pattern emitted by `git log` on a repository without commits
    pub const NO_COMMITS_YET: &str = "does not have any commits yet";
}
