// Subprocess execution with live output streaming

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Called once per stdout line as the child produces it.
pub type LineCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error while running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {code}\n{stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Run a command in `cwd`, streaming stdout lines through `live_output`
/// as they arrive. Returns the collected stdout on success; a nonzero
/// exit becomes `ExecError::CommandFailed` carrying the child's stderr.
pub async fn run_command(
    program: &str,
    args: &[&str],
    cwd: &Path,
    live_output: Option<LineCallback>,
) -> Result<String, ExecError> {
    tracing::debug!("Running {} {:?} in {}", program, args, cwd.display());

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let stdout = child.stdout.take().expect("stdout was piped");
    let stderr = child.stderr.take().expect("stderr was piped");

    // Drain stderr in a background task so it doesn't block stdout reading
    let stderr_task = tokio::spawn(async move {
        let mut buf = String::new();
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            buf.push_str(&line);
            buf.push('\n');
        }
        buf
    });

    let mut stdout_buf = String::new();
    let mut stdout_lines = BufReader::new(stdout).lines();
    while let Ok(Some(line)) = stdout_lines.next_line().await {
        if let Some(ref cb) = live_output {
            cb(&line);
        }
        stdout_buf.push_str(&line);
        stdout_buf.push('\n');
    }

    let stderr_buf = stderr_task.await.unwrap_or_default();
    let exit_status = child.wait().await.map_err(|source| ExecError::Io {
        program: program.to_string(),
        source,
    })?;

    if !exit_status.success() {
        return Err(ExecError::CommandFailed {
            program: program.to_string(),
            code: exit_status.code().unwrap_or(-1),
            stderr: stderr_buf,
        });
    }

    Ok(stdout_buf)
}
