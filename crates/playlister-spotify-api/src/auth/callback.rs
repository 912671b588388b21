use eyre::Result;
use eyre::WrapErr;
use eyre::bail;
use http::StatusCode;
use std::net::SocketAddr;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;
use tracing::warn;
use url::Url;

const MAX_REQUEST_HEAD: usize = 8 * 1024;

const SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="UTF-8"><title>Spotify Auth</title></head>
  <body style="font-family:sans-serif;text-align:center;padding-top:3em">
    <h1>Authorization successful!</h1>
    <p>You can close this window.</p>
  </body>
</html>
"#;

const FAILURE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="UTF-8"><title>Spotify Auth</title></head>
  <body style="font-family:sans-serif;text-align:center;padding-top:3em">
    <h1>Authorization failed!</h1>
  </body>
</html>
"#;

/// Single-use code handed back by the provider's redirect.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationCode(pub String);

impl std::fmt::Debug for AuthorizationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthorizationCode(len={})", self.0.len())
    }
}

/// A bound loopback listener that will answer exactly one redirect.
pub struct CallbackListener {
    listener: TcpListener,
}

impl CallbackListener {
    pub async fn bind(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .wrap_err_with(|| format!("Failed to bind callback listener on {}", addr))?;
        debug!("Listening for code on {}", addr);
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve one request in the background.
    ///
    /// The listener moves into the task and is dropped as soon as one connection has
    /// been accepted, or when the task fails. There is no timeout.
    pub fn spawn(self) -> PendingCode {
        let (tx, rx) = oneshot::channel();
        let listener = self.listener;
        let task = tokio::spawn(async move {
            let (socket, peer) = listener.accept().await?;
            drop(listener);
            debug!("Callback connection from {}", peer);
            let code = answer(socket).await?;
            // The waiter may already be gone; nothing else to do then.
            let _ = tx.send(code);
            Ok::<(), eyre::Report>(())
        });
        PendingCode { code: rx, task }
    }
}

/// Receiving side of a spawned [`CallbackListener`].
pub struct PendingCode {
    code: oneshot::Receiver<Option<AuthorizationCode>>,
    task: JoinHandle<Result<()>>,
}

impl PendingCode {
    /// Block until the callback request has been handled.
    ///
    /// `Ok(None)` means a request arrived but carried no `code`.
    pub async fn wait(self) -> Result<Option<AuthorizationCode>> {
        match self.code.await {
            Ok(code) => Ok(code),
            Err(_) => {
                self.task
                    .await
                    .wrap_err("Callback listener task panicked")?
                    .wrap_err("Callback listener failed")?;
                bail!("Callback listener stopped without handling a request")
            }
        }
    }
}

async fn answer(mut socket: TcpStream) -> Result<Option<AuthorizationCode>> {
    let head = read_request_head(&mut socket).await?;
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    debug!("Callback request for path {}", target.split('?').next().unwrap_or(target));

    let code = parse_code(target);
    let (status, body) = match code {
        Some(_) => (StatusCode::OK, SUCCESS_PAGE),
        None => (StatusCode::BAD_REQUEST, FAILURE_PAGE),
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        body.len(),
        body
    );
    if let Err(e) = write_response(&mut socket, response.as_bytes()).await {
        warn!("Failed to answer callback request: {}", e);
    }

    Ok(code)
}

async fn write_response(socket: &mut TcpStream, response: &[u8]) -> std::io::Result<()> {
    socket.write_all(response).await?;
    socket.shutdown().await
}

async fn read_request_head(socket: &mut TcpStream) -> Result<String> {
    let mut head = Vec::with_capacity(1024);
    let mut buffer = [0; 1024];
    loop {
        let n = socket.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buffer[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") || head.len() >= MAX_REQUEST_HEAD {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&head).into_owned())
}

/// Pull a non-empty `code` out of a request target such as `/callback?code=...`.
pub fn parse_code(target: &str) -> Option<AuthorizationCode> {
    let url = Url::parse(&format!("http://localhost{}", target)).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "code")
        .map(|(_, v)| v.into_owned())
        .filter(|code| !code.is_empty())
        .map(AuthorizationCode)
}
