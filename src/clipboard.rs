use anyhow::{Context, Result};
use arboard::Clipboard;
use std::time::{Duration, Instant};

/// Upper bound on how long the process keeps serving the selection.
///
/// X11 and Wayland clipboards are owned by the copying process. If a clipboard
/// manager takes ownership the wait ends early; without one the contents are
/// lost once this window closes and the process exits.
pub const HOLD_AFTER_COPY: Duration = Duration::from_secs(2);

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn hold_deadline(now: Instant) -> Instant {
    now + HOLD_AFTER_COPY
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, secret: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard
        .set()
        .wait_until(hold_deadline(Instant::now()))
        .text(secret)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, secret: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(secret)
}

pub fn copy_to_clipboard(secret: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access the system clipboard")?;

    set_text(&mut clipboard, secret).context("Failed to copy password to clipboard")?;

    log::debug!("Copied {} characters to clipboard", secret.chars().count());

    Ok(())
}
