//! # comptab-git
//!
//! **Tier 2 (Utilities)**
//!
//! Best-effort change-state lookup. Asks git whether a scanned file is newly
//! added or modified; every failure mode (git missing, not a repository,
//! clean file, I/O error) degrades to [`ChangeState::Unmodified`] so the
//! scan itself never depends on git being present.
//!
//! ## What belongs here
//! * The `StatusResolver` seam
//! * `git status --porcelain` invocation and status-code parsing
//!
//! ## What does NOT belong here
//! * Filesystem traversal (use comptab-walk)
//! * Git history analysis

use std::path::Path;
use std::process::{Command, Stdio};

use comptab_types::ChangeState;

/// Create a `Command` for git with process-environment isolation.
///
/// Strips `GIT_DIR` and `GIT_WORK_TREE` so that inherited environment
/// variables cannot override the explicit `-C` path.
fn git_cmd() -> Command {
    let mut cmd = Command::new("git");
    cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
    cmd
}

/// Supplies the change state for one file at a time.
///
/// The walker calls this once per file; implementations must not fail the
/// scan, only degrade to `Unmodified`.
pub trait StatusResolver {
    fn resolve(&self, root: &Path, relative: &Path) -> ChangeState;
}

/// Resolver backed by `git status --porcelain`, scoped to a single path.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStatus;

impl StatusResolver for GitStatus {
    fn resolve(&self, root: &Path, relative: &Path) -> ChangeState {
        let output = git_cmd()
            .arg("-C")
            .arg(root)
            .args(["status", "--porcelain", "--"])
            .arg(relative)
            .stderr(Stdio::null())
            .output();

        let output = match output {
            Ok(out) if out.status.success() => out,
            _ => return ChangeState::Unmodified,
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_status_code(stdout.trim_start())
    }
}

/// Resolver that returns the same state for every file.
///
/// `FixedStatus::default()` is the neutral resolver: all states empty. Tests
/// use non-default states to pin rendering without needing a repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStatus(pub ChangeState);

impl StatusResolver for FixedStatus {
    fn resolve(&self, _root: &Path, _relative: &Path) -> ChangeState {
        self.0
    }
}

/// Map a porcelain status line to a change state.
///
/// Leading `A` means staged-new, leading `M` means modified. Everything else
/// (untracked `??`, renames, empty output for clean files) is `Unmodified`.
#[must_use]
pub fn parse_status_code(code: &str) -> ChangeState {
    if code.starts_with('A') {
        ChangeState::Created
    } else if code.starts_with('M') {
        ChangeState::Changed
    } else {
        ChangeState::Unmodified
    }
}

pub fn git_available() -> bool {
    git_cmd()
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
