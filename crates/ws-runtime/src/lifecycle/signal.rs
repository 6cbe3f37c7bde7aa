use tokio_util::sync::CancellationToken;

/// Cancel `cancel` on the first SIGINT or SIGTERM.
pub async fn wait_for_signal(cancel: CancellationToken) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to listen for SIGTERM");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                ws_info!(sys, signal = "SIGINT", "received signal, stopping simulator");
            }
            _ = sigterm.recv() => {
                ws_info!(sys, signal = "SIGTERM", "received signal, stopping simulator");
            }
            _ = cancel.cancelled() => return,
        }
    }
    #[cfg(not(unix))]
    {
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.expect("failed to listen for Ctrl-C");
                ws_info!(sys, "received Ctrl-C, stopping simulator");
            }
            _ = cancel.cancelled() => return,
        }
    }
    cancel.cancel();
}
