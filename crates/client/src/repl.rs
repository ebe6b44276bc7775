//! Interactive loop for the `shelf` binary.
//!
//! Input lines and state changes are handled as they arrive, so a fetch that
//! never finishes does not stop the user from switching sources or quitting.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::LoadController;
use crate::input::Input;
use crate::render::render;

/// Drive `controller` from `input`, writing a fresh render to `out` whenever
/// what the screen shows changes.
///
/// Returns on `quit`, or once input ends and the last load has settled.
pub async fn run<R, W>(controller: &LoadController, input: R, mut out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut snapshots = controller.subscribe();
    let mut shown = String::new();
    let view = render(&snapshots.borrow_and_update().state);
    show(&mut out, &mut shown, view)?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = render(&snapshots.borrow_and_update().state);
                show(&mut out, &mut shown, view)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    let state = controller.settled().await;
                    show(&mut out, &mut shown, render(&state))?;
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match Input::parse(&line) {
                    Ok(input) => match input.into_msg() {
                        Some(msg) => {
                            controller.dispatch(msg)?;
                        }
                        None => break,
                    },
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
        }
    }
    Ok(())
}

fn show<W: Write>(out: &mut W, shown: &mut String, view: String) -> std::io::Result<()> {
    if view != *shown {
        out.write_all(view.as_bytes())?;
        out.flush()?;
        *shown = view;
    }
    Ok(())
}
