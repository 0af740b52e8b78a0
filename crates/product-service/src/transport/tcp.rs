//! # TCP Command Channel
//!
//! A newline-delimited JSON protocol over TCP. Each request is one JSON
//! object per line, tagged with a command name instead of an HTTP verb:
//!
//! ```text
//! {"cmd": "add_product", "data": {"name": "Widget", "price": 10.0}}
//! {"cmd": "get_products"}
//! ```
//!
//! Each request gets exactly one reply line:
//!
//! ```text
//! {"ok": true, "data": {"id": 1, "name": "Widget", "price": 10.0}}
//! {"ok": false, "error": {"kind": "validation", "message": "..."}}
//! ```
//!
//! Malformed JSON, an unknown command, or an invalid payload produce an
//! error reply on the same connection; the connection stays open. Requests
//! on one connection are handled one at a time, in order; each accepted
//! connection runs in its own task.

use crate::clients::ProductClient;
use crate::model::ProductCreate;
use crate::product_actor::ProductError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// One inbound command frame.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandFrame {
    cmd: String,
    #[serde(default)]
    data: Option<Value>,
}

/// The TCP listener for the command-message channel.
pub struct CommandListener {
    listener: TcpListener,
    client: ProductClient,
}

impl CommandListener {
    /// Binds the command channel. A bind failure is fatal at startup and
    /// propagates to the caller.
    pub async fn bind(addr: SocketAddr, client: ProductClient) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, client })
    }

    /// The address the listener is actually bound to (useful when binding
    /// to port 0 in tests).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop: one spawned task per connection.
    pub async fn run(self) {
        loop {
            match self.listener.accept().await {
                Ok((socket, peer)) => {
                    debug!(%peer, "Command connection accepted");
                    let client = self.client.clone();
                    tokio::spawn(handle_connection(socket, client));
                }
                Err(e) => {
                    // Accept errors can be persistent (e.g. fd exhaustion);
                    // back off instead of spinning on the error.
                    warn!(error = %e, "Failed to accept command connection");
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            }
        }
    }
}

/// Reads command frames line by line and writes one reply line per frame.
async fn handle_connection(socket: TcpStream, client: ProductClient) {
    let peer = socket.peer_addr().ok();
    let (reader, mut writer) = socket.into_split();
    let mut lines = BufReader::new(reader).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(peer = ?peer, error = %e, "Command connection read failed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = dispatch_line(&line, &client).await;
        let mut out = reply.to_string();
        out.push('\n');
        if writer.write_all(out.as_bytes()).await.is_err() {
            break;
        }
    }

    debug!(peer = ?peer, "Command connection closed");
}

/// Parses one frame and forwards it to the store client.
async fn dispatch_line(line: &str, client: &ProductClient) -> Value {
    let frame: CommandFrame = match serde_json::from_str(line) {
        Ok(frame) => frame,
        Err(e) => return error_reply("malformed", &format!("invalid command frame: {e}")),
    };

    debug!(cmd = %frame.cmd, "Dispatching command");
    match frame.cmd.as_str() {
        "add_product" => {
            let data = frame.data.unwrap_or(Value::Null);
            let params: ProductCreate = match serde_json::from_value(data) {
                Ok(params) => params,
                Err(e) => return error_reply("validation", &format!("invalid payload: {e}")),
            };
            match client.create_product(params).await {
                Ok(product) => {
                    info!(id = %product.id, "Product created via command channel");
                    ok_reply(json!(product))
                }
                Err(e) => product_error_reply(&e),
            }
        }
        "get_products" => match client.list_products().await {
            Ok(products) => ok_reply(json!(products)),
            Err(e) => product_error_reply(&e),
        },
        other => error_reply("unknown_command", &format!("unknown command: {other}")),
    }
}

fn ok_reply(data: Value) -> Value {
    json!({ "ok": true, "data": data })
}

fn error_reply(kind: &str, message: &str) -> Value {
    json!({ "ok": false, "error": { "kind": kind, "message": message } })
}

fn product_error_reply(error: &ProductError) -> Value {
    let kind = match error {
        ProductError::NotFound(_) => "not_found",
        ProductError::Validation(_) => "validation",
        ProductError::StoreCommunication(_) => "internal",
    };
    error_reply(kind, &error.to_string())
}
