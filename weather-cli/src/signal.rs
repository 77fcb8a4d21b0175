//! Process signal handling.

use std::{
    future::Future,
    io::{self, Write},
};

use tokio_util::sync::CancellationToken;

/// Wait for an interrupt or termination signal, announce it on stdout and
/// cancel `cancel`. Runs for the lifetime of the process.
pub async fn listen(cancel: CancellationToken) {
    listen_on(wait_for_signal(), io::stdout(), cancel).await;
}

/// Wait for `signal` to name the signal received, then print the notice to
/// `out` and cancel. A failed `signal` leaves the token untouched.
pub async fn listen_on<F, W>(signal: F, mut out: W, cancel: CancellationToken)
where
    F: Future<Output = io::Result<&'static str>>,
    W: Write,
{
    match signal.await {
        Ok(name) => {
            if let Err(err) = writeln!(out, "Received {name}, exiting.").and_then(|()| out.flush()) {
                tracing::warn!(%err, "failed to print exit notice");
            }
            cancel.cancel();
        }
        Err(err) => tracing::warn!(%err, "failed to install signal handlers"),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let terminate = async {
        signal(SignalKind::terminate())?.recv().await;
        Ok::<_, io::Error>(())
    };

    first_signal(tokio::signal::ctrl_c(), terminate).await
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<&'static str> {
    first_signal(tokio::signal::ctrl_c(), std::future::pending::<io::Result<()>>()).await
}

/// Resolve with the name of whichever handler fires first.
///
/// Each handler is installed on its own: when one fails to install, the
/// other is still awaited. Fails only when both fail.
async fn first_signal<I, T>(interrupt: I, terminate: T) -> io::Result<&'static str>
where
    I: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    tokio::pin!(interrupt, terminate);

    tokio::select! {
        res = &mut interrupt => match res {
            Ok(()) => Ok("interrupt"),
            Err(err) => {
                tracing::warn!(%err, "failed to install interrupt handler");
                terminate.await.map(|()| "terminated")
            }
        },
        res = &mut terminate => match res {
            Ok(()) => Ok("terminated"),
            Err(err) => {
                tracing::warn!(%err, "failed to install termination handler");
                interrupt.await.map(|()| "interrupt")
            }
        },
    }
}
