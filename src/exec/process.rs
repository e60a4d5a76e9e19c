//! Blocking subprocess execution shared by the tool wrappers

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::context::Context;
use crate::error::{PackagesError, Result, exec::command_failed};

/// Run `program` with `args`, optionally feeding `stdin`, and return stdout
///
/// A non-zero exit fails with the captured stdout attached to the error, so
/// callers can still show whatever the tool printed.
pub(crate) fn run(
    ctx: &Context,
    program: &Path,
    args: &[String],
    stdin: Option<&[u8]>,
) -> Result<Vec<u8>> {
    ctx.check()?;

    let label = program
        .file_name()
        .map_or_else(|| program.display().to_string(), |n| n.to_string_lossy().into_owned());
    debug!(command = %label, args = ?args, "running external command");

    let mut child = Command::new(program)
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| command_failed(&label, format!("unable to start {}: {e}", program.display()), ""))?;

    // The pipe is closed before waiting so the child sees EOF. A child that
    // exits without reading everything breaks the pipe; it is still reaped
    // and its own diagnostics take precedence over the write error.
    let write_error = match (stdin, child.stdin.take()) {
        (Some(input), Some(mut pipe)) => pipe.write_all(input).err(),
        _ => None,
    };

    let output = child
        .wait_with_output()
        .map_err(|e| command_failed(&label, e.to_string(), ""))?;

    if !output.status.success() {
        return Err(failure(label, &output));
    }
    if let Some(e) = write_error {
        return Err(command_failed(
            label,
            format!("unable to write stdin: {e}"),
            String::from_utf8_lossy(&output.stdout),
        ));
    }

    Ok(output.stdout)
}

/// Error for a child that exited non-zero, preferring its stderr as the reason
fn failure(label: String, output: &Output) -> PackagesError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = if stderr.trim().is_empty() {
        output.status.to_string()
    } else {
        stderr.trim().to_string()
    };
    command_failed(label, reason, String::from_utf8_lossy(&output.stdout))
}
