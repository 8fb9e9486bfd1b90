//! Integration tests for the Git interface.
//!
//! These tests use real git repositories created via tempfile to verify
//! that the Git interface works correctly with actual git operations.

use std::cell::Cell;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use gitwit::git::hooks::{self, AliasChange, HookInstall};
use gitwit::git::{CommitOptions, Git, GitError, GitState};

/// Test fixture that creates a real git repository.
///
/// Every commit gets its own timestamp, one minute after the previous one,
/// so history order and tag order are deterministic.
struct TestRepo {
    dir: TempDir,
    clock: Cell<u64>,
}

const EPOCH: u64 = 1_700_000_000;

impl TestRepo {
    /// Create a new test repository with an initial commit.
    fn new() -> Self {
        let repo = Self::empty();
        repo.commit_file("README.md", "# Test Repo\n", "chore: initial commit");
        repo
    }

    /// Create a repository without commits.
    fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"], &[]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"], &[]);
        run_git(dir.path(), &["config", "user.name", "Test User"], &[]);
        run_git(dir.path(), &["config", "commit.gpgsign", "false"], &[]);
        run_git(dir.path(), &["config", "tag.gpgsign", "false"], &[]);

        Self {
            dir,
            clock: Cell::new(0),
        }
    }

    /// Get the path to the repository.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a Git interface to this repository.
    fn git(&self) -> Git {
        Git::open(self.path()).expect("failed to open test repo")
    }

    fn next_date(&self) -> String {
        let tick = self.clock.get() + 1;
        self.clock.set(tick);
        format!("{} +0000", EPOCH + tick * 60)
    }

    /// Create a file and commit it, returning the new commit id.
    fn commit_file(&self, path: &str, content: &str, message: &str) -> String {
        std::fs::write(self.path().join(path), content).unwrap();
        run_git(self.path(), &["add", path], &[]);
        let date = self.next_date();
        run_git(
            self.path(),
            &["commit", "-m", message],
            &[("GIT_AUTHOR_DATE", &date), ("GIT_COMMITTER_DATE", &date)],
        );
        self.head_oid_raw()
    }

    /// Commit with a unique file per message.
    fn commit(&self, message: &str) -> String {
        let n = self.clock.get();
        self.commit_file(&format!("file{n}.txt"), message, message)
    }

    /// Lightweight tag at HEAD.
    fn tag(&self, name: &str) {
        run_git(self.path(), &["tag", name], &[]);
    }

    /// Annotated tag at HEAD.
    fn annotated_tag(&self, name: &str) {
        let date = self.next_date();
        run_git(
            self.path(),
            &["tag", "-a", name, "-m", name],
            &[("GIT_COMMITTER_DATE", &date)],
        );
    }

    /// Get HEAD OID using git directly.
    fn head_oid_raw(&self) -> String {
        git_output(self.path(), &["rev-parse", "HEAD"])
    }

    fn config_value(&self, key: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["config", "--local", "--get", key])
            .current_dir(self.path())
            .output()
            .expect("git config failed");
        output
            .status
            .success()
            .then(|| String::from_utf8(output.stdout).unwrap().trim().to_string())
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str], env: &[(&str, &str)]) {
    let output = Command::new("git")
        .args(args)
        .envs(env.iter().copied())
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn git_output(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

fn summaries(commits: &[gitwit::git::HistoryCommit]) -> Vec<&str> {
    commits.iter().map(|c| c.summary()).collect()
}

// =============================================================================
// Repository Opening Tests
// =============================================================================

#[test]
fn open_valid_repository() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path());
    assert!(git.is_ok());
}

#[test]
fn open_from_subdirectory() {
    let repo = TestRepo::new();
    let subdir = repo.path().join("subdir");
    std::fs::create_dir(&subdir).unwrap();

    let git = Git::open(&subdir).unwrap();
    assert_eq!(
        git.work_dir().unwrap().canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn open_non_repository_fails() {
    let dir = TempDir::new().unwrap();
    let git = Git::open(dir.path());
    assert!(matches!(git, Err(GitError::NotARepo { .. })));
}

#[test]
fn clean_state() {
    let repo = TestRepo::new();
    assert_eq!(repo.git().state(), GitState::Clean);
}

// =============================================================================
// History Tests
// =============================================================================

#[test]
fn resolve_head() {
    let repo = TestRepo::new();
    let head = repo.git().resolve_commit("HEAD").unwrap();

    assert_eq!(head.id, repo.head_oid_raw());
    assert_eq!(head.summary(), "chore: initial commit");
    assert_eq!(head.author.name, "Test User");
    assert_eq!(head.author.email, "test@example.com");
    assert_eq!(head.short_id().len(), 7);
}

#[test]
fn history_commit_parses_message() {
    let repo = TestRepo::new();
    repo.commit("feat(api)!: new endpoint\n\nBody text\n\nBREAKING CHANGE: old one removed");

    let message = repo.git().resolve_commit("HEAD").unwrap().to_message();
    assert_eq!(message.r#type.as_deref(), Some("feat"));
    assert_eq!(message.scope.as_deref(), Some("api"));
    assert!(message.breaking_changes);
    assert_eq!(message.long_description.as_deref(), Some("Body text"));
    assert_eq!(
        message.breaking_changes_desc.as_deref(),
        Some("old one removed")
    );
    assert_eq!(message.hash.as_deref(), Some(repo.head_oid_raw().as_str()));
}

#[test]
fn unknown_revision_is_not_found() {
    let repo = TestRepo::new();
    let err = repo.git().resolve_commit("does-not-exist").unwrap_err();
    assert!(matches!(err, GitError::RevNotFound { spec } if spec == "does-not-exist"));
}

#[test]
fn blank_rev_spec_is_not_found() {
    let repo = TestRepo::new();
    assert!(matches!(
        repo.git().resolve_commits("  "),
        Err(GitError::RevNotFound { .. })
    ));
}

#[test]
fn range_includes_start_commit() {
    let repo = TestRepo::new();
    let start = repo.commit("feat: one");
    repo.commit("fix: two");
    repo.commit("docs: three");

    let commits = repo.git().resolve_commits(&format!("{start}..HEAD")).unwrap();
    assert_eq!(summaries(&commits), vec!["docs: three", "fix: two", "feat: one"]);
}

#[test]
fn range_with_blank_end_defaults_to_head() {
    let repo = TestRepo::new();
    repo.commit("feat: one");
    repo.tag("v1.0.0");
    repo.commit("fix: two");

    let commits = repo.git().resolve_commits("v1.0.0..").unwrap();
    assert_eq!(summaries(&commits), vec!["fix: two", "feat: one"]);
}

#[test]
fn range_from_annotated_tag_excludes_tagged_commit() {
    let repo = TestRepo::new();
    repo.commit("feat: one");
    repo.annotated_tag("v1.0.0");
    repo.commit("fix: two");

    let commits = repo.git().resolve_commits("v1.0.0..HEAD").unwrap();
    assert_eq!(summaries(&commits), vec!["fix: two"]);
}

#[test]
fn single_revision_resolves_one_commit() {
    let repo = TestRepo::new();
    repo.commit("feat: one");
    repo.commit("fix: two");

    let commits = repo.git().resolve_commits("HEAD~1").unwrap();
    assert_eq!(summaries(&commits), vec!["feat: one"]);
}

#[test]
fn resolve_range_precedence() {
    let repo = TestRepo::new();
    let first = repo.commit("feat: one");
    repo.commit("fix: two");
    let git = repo.git();

    // rev-spec wins over from/to
    let commits = git
        .resolve_range(Some("HEAD"), Some(first.as_str()), None)
        .unwrap();
    assert_eq!(summaries(&commits), vec!["fix: two"]);

    // from alone runs to HEAD
    let commits = git.resolve_range(None, Some(first.as_str()), None).unwrap();
    assert_eq!(summaries(&commits), vec!["fix: two", "feat: one"]);

    // nothing means HEAD
    let commits = git.resolve_range(None, Some(" "), None).unwrap();
    assert_eq!(summaries(&commits), vec!["fix: two"]);
}

#[test]
fn history_walks_everything_newest_first() {
    let repo = TestRepo::new();
    repo.commit("feat: one");
    repo.commit("fix: two");

    let commits = repo.git().history("HEAD").unwrap();
    assert_eq!(
        summaries(&commits),
        vec!["fix: two", "feat: one", "chore: initial commit"]
    );
}

// =============================================================================
// Tag Tests
// =============================================================================

#[test]
fn no_tags() {
    let repo = TestRepo::new();
    assert_eq!(repo.git().latest_tag().unwrap(), None);
}

#[test]
fn latest_tag_follows_commit_time() {
    let repo = TestRepo::new();
    repo.commit("feat: one");
    repo.tag("v1.0.0");
    repo.commit("feat: two");
    repo.annotated_tag("v1.1.0");
    repo.commit("fix: three");

    assert_eq!(repo.git().latest_tag().unwrap().as_deref(), Some("v1.1.0"));
}

#[test]
fn previous_tag_is_strictly_older() {
    let repo = TestRepo::new();
    repo.commit("feat: one");
    repo.tag("v1.0.0");
    repo.commit("feat: two");
    repo.tag("v1.1.0");
    let git = repo.git();

    assert_eq!(git.previous_tag("v1.1.0").unwrap().as_deref(), Some("v1.0.0"));
    assert_eq!(git.previous_tag("v1.0.0").unwrap(), None);
}

// =============================================================================
// Commit Tests
// =============================================================================

#[test]
fn commit_staged_changes() {
    let repo = TestRepo::new();
    std::fs::write(repo.path().join("new.txt"), "content").unwrap();
    run_git(repo.path(), &["add", "new.txt"], &[]);

    let record = repo
        .git()
        .commit("feat: add new file", CommitOptions::default())
        .unwrap();

    assert_eq!(record.id, repo.head_oid_raw());
    assert_eq!(
        git_output(repo.path(), &["log", "-1", "--format=%s"]),
        "feat: add new file"
    );
}

#[test]
fn commit_without_changes_is_rejected() {
    let repo = TestRepo::new();
    let err = repo
        .git()
        .commit("chore: nothing", CommitOptions::default())
        .unwrap_err();
    assert!(matches!(err, GitError::EmptyCommit));
}

#[test]
fn commit_allow_empty() {
    let repo = TestRepo::new();
    let before = repo.head_oid_raw();
    let record = repo
        .git()
        .commit(
            "chore: empty",
            CommitOptions {
                allow_empty: true,
                ..Default::default()
            },
        )
        .unwrap();

    assert_ne!(record.id, before);
    assert_eq!(git_output(repo.path(), &["rev-parse", "HEAD~1"]), before);
}

#[test]
fn commit_add_all_stages_untracked_and_modified() {
    let repo = TestRepo::new();
    std::fs::write(repo.path().join("README.md"), "# Changed\n").unwrap();
    std::fs::write(repo.path().join("untracked.txt"), "new").unwrap();

    repo.git()
        .commit(
            "feat: stage all",
            CommitOptions {
                add_all: true,
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(git_output(repo.path(), &["status", "--porcelain"]), "");
    let files = git_output(repo.path(), &["show", "--name-only", "--format=", "HEAD"]);
    assert!(files.contains("README.md"));
    assert!(files.contains("untracked.txt"));
}

#[test]
fn commit_amend_replaces_head() {
    let repo = TestRepo::new();
    let original = repo.commit("feat: typo");
    let parent = git_output(repo.path(), &["rev-parse", "HEAD~1"]);

    repo.git()
        .commit(
            "feat: fixed message",
            CommitOptions {
                amend: true,
                ..Default::default()
            },
        )
        .unwrap();

    assert_ne!(repo.head_oid_raw(), original);
    assert_eq!(git_output(repo.path(), &["rev-parse", "HEAD~1"]), parent);
    assert_eq!(
        git_output(repo.path(), &["log", "-1", "--format=%s"]),
        "feat: fixed message"
    );
}

#[test]
fn first_commit_in_empty_repository() {
    let repo = TestRepo::empty();
    std::fs::write(repo.path().join("a.txt"), "a").unwrap();
    run_git(repo.path(), &["add", "a.txt"], &[]);

    repo.git()
        .commit("feat: first", CommitOptions::default())
        .unwrap();
    assert_eq!(
        git_output(repo.path(), &["log", "--format=%s"]),
        "feat: first"
    );
}

#[test]
fn amend_without_commits_fails() {
    let repo = TestRepo::empty();
    let err = repo
        .git()
        .commit(
            "feat: nothing to amend",
            CommitOptions {
                amend: true,
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, GitError::NoHead));
}

// =============================================================================
// Hook and Alias Tests
// =============================================================================

#[test]
fn install_hook_writes_script_and_config() {
    let repo = TestRepo::new();
    let exe = Path::new("/usr/local/bin/gitwit");

    let outcome = hooks::install_commit_hook(&repo.git(), exe, false).unwrap();
    let HookInstall::Installed {
        path, configured, ..
    } = outcome
    else {
        panic!("expected the hook to be installed");
    };

    assert!(configured);
    assert!(path.ends_with(".githooks/prepare-commit-msg"));
    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.contains("\"/usr/local/bin/gitwit\" hook"));
    assert_eq!(repo.config_value("core.hooksPath").as_deref(), Some(".githooks"));
    assert_eq!(repo.config_value("core.editor").as_deref(), Some("cat"));
    assert!(hooks::is_hook_installed(&repo.git()).unwrap());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[test]
fn install_hook_migrates_existing_hooks() {
    let repo = TestRepo::new();
    let default_hooks = repo.path().join(".git/hooks");
    std::fs::create_dir_all(&default_hooks).unwrap();
    std::fs::write(default_hooks.join("pre-push"), "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::write(default_hooks.join("pre-commit.sample"), "#!/bin/sh\n").unwrap();

    let HookInstall::Installed { migrated, .. } =
        hooks::install_commit_hook(&repo.git(), Path::new("gitwit"), false).unwrap()
    else {
        panic!("expected the hook to be installed");
    };

    assert_eq!(migrated.len(), 1);
    assert!(repo.path().join(".githooks/pre-push").is_file());
    assert!(!default_hooks.join("pre-push").exists());
    assert!(default_hooks.join("pre-commit.sample").exists());
}

#[test]
fn install_hook_twice_needs_force() {
    let repo = TestRepo::new();
    let git = repo.git();
    hooks::install_commit_hook(&git, Path::new("gitwit"), false).unwrap();

    let again = hooks::install_commit_hook(&git, Path::new("gitwit"), false).unwrap();
    assert!(matches!(again, HookInstall::AlreadyExists(_)));

    let forced = hooks::install_commit_hook(&git, Path::new("/opt/gitwit"), true).unwrap();
    let HookInstall::Installed {
        path, configured, ..
    } = forced
    else {
        panic!("expected the hook to be reinstalled");
    };
    assert!(!configured);
    assert!(std::fs::read_to_string(path).unwrap().contains("/opt/gitwit"));
}

#[test]
fn uninstall_hook_clears_config() {
    let repo = TestRepo::new();
    let git = repo.git();
    hooks::install_commit_hook(&git, Path::new("gitwit"), false).unwrap();

    let removal = hooks::uninstall_commit_hook(&git).unwrap();
    assert!(removal.removed.is_some());
    assert!(removal.config_cleared);
    assert_eq!(repo.config_value("core.hooksPath"), None);
    assert_eq!(repo.config_value("core.editor"), None);

    let again = hooks::uninstall_commit_hook(&git).unwrap();
    assert_eq!(again.removed, None);
    assert!(!again.config_cleared);
}

#[test]
fn uninstall_keeps_foreign_hooks_path() {
    let repo = TestRepo::new();
    run_git(repo.path(), &["config", "core.hooksPath", ".husky"], &[]);

    let removal = hooks::uninstall_commit_hook(&repo.git()).unwrap();
    assert!(!removal.config_cleared);
    assert_eq!(repo.config_value("core.hooksPath").as_deref(), Some(".husky"));
}

#[test]
fn local_alias_lifecycle() {
    let repo = TestRepo::new();
    let git = repo.git();
    let mut config = git.local_config().unwrap();
    let exe = Path::new("/usr/bin/gitwit");

    assert_eq!(hooks::set_alias(&mut config, exe).unwrap(), AliasChange::Set);
    assert_eq!(
        repo.config_value("alias.wit").as_deref(),
        Some("!/usr/bin/gitwit")
    );
    assert_eq!(
        hooks::set_alias(&mut config, exe).unwrap(),
        AliasChange::AlreadySet
    );

    assert_eq!(hooks::remove_alias(&mut config).unwrap(), AliasChange::Removed);
    assert_eq!(repo.config_value("alias.wit"), None);
    assert_eq!(
        hooks::remove_alias(&mut config).unwrap(),
        AliasChange::NotConfigured
    );
}
