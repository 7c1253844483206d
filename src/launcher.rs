// src/launcher.rs

//! Publisher launching.
//!
//! Builds the publisher's argument vector and transfers control to it. On
//! Unix the current process image is replaced; elsewhere the publisher runs
//! as a child process and its exit status becomes ours. Either way the
//! current environment is inherited.

use crate::error::HeraldError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Renders the publisher invocation for display and logging.
pub fn argv(publisher: &Path, aliases: &[String]) -> String {
    let mut rendered = publisher.display().to_string();
    for alias in aliases {
        rendered.push(' ');
        rendered.push_str(alias);
    }
    rendered
}

/// Launches the publisher with the aliases as its argument vector.
///
/// On Unix this call does not return on success: the publisher replaces the
/// current process image. On other targets the publisher runs as a child and
/// its exit status is returned for the caller to propagate.
///
/// # Errors
/// Returns [`HeraldError::Launch`] naming the publisher when it is missing or
/// cannot be executed.
pub fn launch(publisher: &Path, aliases: &[String]) -> Result<ExitCode, HeraldError> {
    debug!("Launching: {}", argv(publisher, aliases));
    let mut cmd = Command::new(publisher);
    cmd.args(aliases);
    run(cmd, publisher)
}

#[cfg(unix)]
fn run(mut cmd: Command, publisher: &Path) -> Result<ExitCode, HeraldError> {
    use std::os::unix::process::CommandExt;
    // exec only returns on failure
    let source = cmd.exec();
    Err(HeraldError::Launch {
        program: publisher.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn run(mut cmd: Command, publisher: &Path) -> Result<ExitCode, HeraldError> {
    let wrap = |source| HeraldError::Launch {
        program: publisher.to_path_buf(),
        source,
    };
    let mut child = cmd.spawn().map_err(wrap)?;
    let status = child.wait().map_err(wrap)?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_lists_publisher_then_aliases_in_order() {
        let aliases = vec!["host1".to_string(), "host2".to_string()];
        assert_eq!(
            argv(Path::new("mdns-publish-cname"), &aliases),
            "mdns-publish-cname host1 host2"
        );
    }

    #[test]
    fn argv_without_aliases_is_just_the_publisher() {
        assert_eq!(argv(Path::new("/usr/bin/true"), &[]), "/usr/bin/true");
    }

    #[test]
    #[cfg(unix)]
    fn launch_missing_publisher_names_program() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("no-such-publisher");
        let err = launch(&missing, &["host1".to_string()]).unwrap_err();
        assert!(err.to_string().contains("no-such-publisher"));
    }
}
