use crate::events::AppEvent;
use async_channel::Sender;
use orbit_core::command::{Request, SOCKET_PATH};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::net::UnixListener;

/// Forwards every well-formed request line from `conn` until it closes.
/// Returns false once the UI side has gone away.
async fn handle_connection<R: AsyncRead + Unpin>(conn: R, tx: &Sender<AppEvent>) -> bool {
    let mut lines = BufReader::new(conn).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return true,
            Err(e) => {
                log::warn!("Control connection dropped: {}", e);
                return true;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Request>() {
            Ok(request) => {
                log::debug!("Control request '{}'", request);
                if tx.send(AppEvent::Command(request)).await.is_err() {
                    return false;
                }
            }
            Err(e) => log::warn!("Ignoring '{}': {}", line, e),
        }
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // a previous instance may have left its socket behind
    if Path::new(SOCKET_PATH).exists()
        && let Err(e) = fs_err::remove_file(SOCKET_PATH)
    {
        log::warn!("{}", e);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Control socket unavailable at {}: {}", SOCKET_PATH, e);
            return;
        }
    };
    log::info!("Listening for commands on {}", SOCKET_PATH);

    while !tx.is_closed() {
        match listener.accept().await {
            Ok((stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move { handle_connection(stream, &tx).await });
            }
            Err(e) => log::error!("Failed to accept connection: {}", e),
        }
    }
}
