//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Start a mock service on an ephemeral port that answers every request
/// with 200 and a fixed body. Returns the bound address and the accept
/// task handle (abort it to take the service down).
#[allow(dead_code)]
pub async fn start_mock_service(body: &'static str) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = serve(listener, body);
    (addr, handle)
}

/// Start a mock service at a specific address. Used by tests that probe
/// an address before anything listens on it.
#[allow(dead_code)]
pub async fn start_mock_service_at(addr: SocketAddr, body: &'static str) -> JoinHandle<()> {
    let listener = TcpListener::bind(addr).await.unwrap();
    serve(listener, body)
}

fn serve(listener: TcpListener, body: &'static str) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    })
}

/// Programmable mock service: the closure decides status and body for
/// each request.
#[allow(dead_code)]
pub async fn start_programmable_service<F, Fut>(f: F) -> (SocketAddr, JoinHandle<()>)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = std::sync::Arc::new(f);

    let handle = tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, handle)
}

/// Scratch file path for observing command side effects; removed first
/// so each test starts clean.
#[allow(dead_code)]
pub fn scratch_file(test_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "service-monitor-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}
