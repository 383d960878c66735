use crate::error::{Result, ToolError};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Handle to a git worktree, queried by shelling out to the `git` binary.
/// Every invocation is bounded by `timeout`; a child that outlives the
/// deadline is killed.
pub struct GitClient {
    path: PathBuf,
    timeout: Duration,
}

impl GitClient {
    /// Open `path` as a git worktree. The path must exist and carry a `.git`
    /// marker; parent-directory discovery is intentionally not performed.
    pub fn open<P: AsRef<Path>>(path: P, timeout: Duration) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ToolError::NotFound(format!(
                "path '{}' does not exist",
                path.display()
            )));
        }
        if !path.join(".git").exists() {
            return Err(ToolError::Validation(format!(
                "'{}' is not a git repository",
                path.display()
            )));
        }
        let path = path.canonicalize()?;
        Ok(Self { path, timeout })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of commits reachable from HEAD.
    pub fn count_commits(&self) -> Result<u64> {
        let out = self.run(&["rev-list", "--count", "HEAD"])?;
        out.trim().parse().map_err(|_| {
            ToolError::ExternalTool(format!(
                "unexpected rev-list output: {:?}",
                out.trim()
            ))
        })
    }

    /// Number of distinct author emails across all commits.
    pub fn count_authors(&self) -> Result<u64> {
        let out = self.run(&["log", "--format=%ae"])?;
        let authors: HashSet<&str> = out
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Ok(authors.len() as u64)
    }

    /// Number of local and remote branches, counted as non-blank lines of
    /// the branch listing.
    pub fn count_branches(&self) -> Result<u64> {
        let out = self.run(&["branch", "-a"])?;
        Ok(out.lines().filter(|line| !line.trim().is_empty()).count() as u64)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let mut child = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ToolError::ExternalTool(format!("failed to run git: {e}")))?;

        // Drain stdout off-thread so a chatty child can't fill the pipe and
        // stall while we poll for exit.
        let mut stdout = child.stdout.take().ok_or_else(|| {
            ToolError::ExternalTool("failed to capture git stdout".to_string())
        })?;
        let reader = thread::spawn(move || {
            let mut buf = String::new();
            stdout.read_to_string(&mut buf).map(|_| buf)
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                child.kill().ok();
                child.wait().ok();
                // the reader sees EOF once the child is gone
                let _ = reader.join();
                return Err(ToolError::ExternalTool(format!(
                    "git {} timed out after {}",
                    args.join(" "),
                    humantime::format_duration(self.timeout)
                )));
            }
            thread::sleep(POLL_INTERVAL);
        };

        let output = reader
            .join()
            .map_err(|_| ToolError::ExternalTool("git stdout reader panicked".to_string()))??;

        if !status.success() {
            return Err(ToolError::ExternalTool(format!(
                "git {} exited with {}",
                args.join(" "),
                status
            )));
        }
        Ok(output)
    }
}
