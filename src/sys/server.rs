use crate::events::AppEvent;
use async_channel::Sender;
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_NAME: &str = "lilac.sock";

/// `$XDG_RUNTIME_DIR/lilac.sock`, or the temp dir where no runtime dir exists.
pub fn socket_path() -> PathBuf {
    BaseDirs::new()
        .and_then(|dirs| dirs.runtime_dir().map(Path::to_path_buf))
        .unwrap_or_else(std::env::temp_dir)
        .join(SOCKET_NAME)
}

pub fn parse_command(line: &str) -> Option<AppEvent> {
    match line.trim().to_ascii_lowercase().as_str() {
        "pause" => Some(AppEvent::Pause),
        "resume" => Some(AppEvent::Resume),
        "toggle" => Some(AppEvent::TogglePause),
        "reverse" => Some(AppEvent::Reverse),
        "faster" => Some(AppEvent::Faster),
        "slower" => Some(AppEvent::Slower),
        "quit" => Some(AppEvent::Quit),
        _ => None,
    }
}

pub async fn run_server(path: PathBuf, tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if fs_err::metadata(&path).is_ok() {
        let _ = fs_err::remove_file(&path);
    }

    let listener = match UnixListener::bind(&path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", path.display(), e);
            return;
        }
    };
    log::info!("Listening for commands on {}", path.display());

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_command(&line) {
                            Some(event) => {
                                if tx.send(event).await.is_err() {
                                    break;
                                }
                            }
                            None => log::debug!("Ignoring unknown command {:?}", line),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
