//! System clipboard backed by `arboard`.
//!
//! On Linux, X11 and Wayland serve a selection from the process that owns
//! it, so a copy made by a short-lived CLI vanishes when it exits. There the
//! binary re-executes itself with [`HOLD_FLAG`] as a detached child that
//! keeps ownership until another application takes the clipboard over.

use std::error::Error;
use std::io::{self, Read};

use dtime_core::Clipboard;

/// Hidden flag that runs the binary as a clipboard holder fed from stdin.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub const HOLD_FLAG: &str = "--hold-clipboard";

type BoxError = Box<dyn Error + Send + Sync>;

/// Opens the system clipboard lazily, on first copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard, BoxError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| "clipboard unavailable".into())
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), BoxError> {
        self.clipboard()?.set_text(text.to_string())?;

        #[cfg(target_os = "linux")]
        spawn_holder(text)?;

        Ok(())
    }
}

/// Hand the selection to a detached copy of this binary.
#[cfg(target_os = "linux")]
fn spawn_holder(text: &str) -> Result<(), BoxError> {
    use std::io::Write;

    let exe = std::env::current_exe()?;
    let mut child = holder_command(&exe).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    tracing::debug!(pid = child.id(), "clipboard: holder spawned");
    Ok(())
}

#[cfg(target_os = "linux")]
fn holder_command(exe: &std::path::Path) -> std::process::Command {
    use std::process::{Command, Stdio};

    let mut command = Command::new(exe);
    command
        .arg(HOLD_FLAG)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Read the text from stdin and own the clipboard until it is replaced.
pub fn hold_from_stdin() -> Result<(), BoxError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    let mut clipboard = arboard::Clipboard::new()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard.set().wait().text(text)?;
    }
    #[cfg(not(target_os = "linux"))]
    clipboard.set_text(text)?;

    Ok(())
}
