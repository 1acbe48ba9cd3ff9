use std::future::{pending, Future};
use std::io::BufRead;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Forwards one trigger per stdin line. The read blocks, so it lives on its own
/// detached thread that the runtime never waits on at shutdown.
pub fn spawn_stdin_trigger() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(8);

    let spawned = std::thread::Builder::new()
        .name("stdin-trigger".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                if let Err(e) = line {
                    warn!(error = ?e, "Failed to read manual refresh trigger");
                    return;
                }
                if tx.blocking_send(()).is_err() {
                    return;
                }
            }
            debug!("Stdin closed, manual refresh trigger unavailable");
        });

    if let Err(e) = spawned {
        warn!(error = ?e, "Failed to spawn stdin trigger thread");
    }

    rx
}

async fn next_trigger(manual: &mut Option<mpsc::Receiver<()>>) -> Option<()> {
    match manual {
        Some(rx) => rx.recv().await,
        None => pending().await,
    }
}

/// Calls `on_manual` for every manual trigger until `shutdown` resolves.
/// A closed or absent trigger channel is not an error.
pub async fn run_until_shutdown<F>(
    mut manual: Option<mpsc::Receiver<()>>,
    shutdown: impl Future<Output = ()>,
    mut on_manual: F,
) where
    F: FnMut(),
{
    tokio::pin!(shutdown);

    loop {
        let trigger = tokio::select! {
            _ = &mut shutdown => break,
            trigger = next_trigger(&mut manual) => trigger,
        };

        match trigger {
            Some(()) => {
                info!("Manual refresh requested");
                on_manual();
            }
            None => {
                debug!("Manual refresh trigger closed");
                manual = None;
            }
        }
    }
}
