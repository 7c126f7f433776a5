use crate::config;
use crate::events::AppEvent;
use crate::sys::server;
use async_channel::Sender;
use std::io;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tokio::task::JoinSet;

const THREAD_NAME: &str = "lilac-services";

/// Runs the command socket and the config watcher on their own thread so the
/// GTK main loop never blocks on them. Returns once the runtime is built.
pub fn start_background_services(
    tx: Sender<AppEvent>,
    config_path: PathBuf,
) -> io::Result<JoinHandle<()>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    thread::Builder::new()
        .name(THREAD_NAME.into())
        .spawn(move || rt.block_on(supervise(server::socket_path(), tx, config_path)))
}

async fn supervise(socket: PathBuf, tx: Sender<AppEvent>, config_path: PathBuf) {
    let mut services = JoinSet::new();
    services.spawn(server::run_server(socket, tx.clone()));
    services.spawn(async move {
        if let Err(e) = config::run_async_watcher(config_path, tx).await {
            log::error!("Config hot reload disabled: {}", e);
        }
    });

    while let Some(res) = services.join_next().await {
        if let Err(e) = res {
            log::error!("Background service crashed: {}", e);
        }
    }
    log::debug!("Background services stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use tokio::net::UnixStream;

    #[tokio::test]
    async fn test_socket_keeps_serving_after_watcher_fails() {
        let socket = std::env::temp_dir().join(format!("lilac-sup-{}.sock", std::process::id()));
        let (tx, rx) = async_channel::unbounded();

        // "/" has no file name, so the watcher gives up immediately
        let services = tokio::spawn(supervise(socket.clone(), tx, PathBuf::from("/")));

        let mut stream = None;
        for _ in 0..50 {
            if let Ok(s) = UnixStream::connect(&socket).await {
                stream = Some(s);
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        let mut stream = stream.expect("server never bound");
        stream.write_all(b"reverse\n").await.unwrap();

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await;
        assert_eq!(event.unwrap().unwrap(), AppEvent::Reverse);
        assert!(!services.is_finished());

        services.abort();
        let _ = fs_err::remove_file(&socket);
    }
}
