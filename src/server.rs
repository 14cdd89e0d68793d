use std::net::UdpSocket;

use anyhow::{Context, Result};
use dns_inspect::{decode, DecodeError};
use tracing::{debug, error, info, warn};

/// Decode one datagram and render it for the server-side dump.
pub fn inspect_datagram(buf: &[u8]) -> Result<String, DecodeError> {
    let message = decode(buf)?;

    info!(
        id = message.header.id,
        flags = message.header.flags,
        questions = message.header.question_count,
        name = message.question.as_ref().map(|q| q.name.as_str()).unwrap_or(""),
        "decoded message"
    );

    Ok(message.to_string())
}

/// UDP listener that prints every message it receives. It never replies.
pub struct DnsInspector {
    socket: UdpSocket,
    max_datagram: usize,
}

impl DnsInspector {
    /// Bind to the given address; datagrams longer than `max_datagram`
    /// bytes are truncated by the receive call.
    pub fn new(bind_addr: &str, max_datagram: usize) -> Result<Self> {
        let socket = UdpSocket::bind(bind_addr)
            .with_context(|| format!("Failed to bind to {}", bind_addr))?;

        info!(addr = %socket.local_addr()?, "listening for DNS messages");

        Ok(Self {
            socket,
            max_datagram,
        })
    }

    /// Receive loop. Undecodable datagrams are logged and dropped; a socket
    /// receive error ends the loop.
    pub fn run(&self) -> Result<()> {
        let mut buf = vec![0u8; self.max_datagram];

        loop {
            let (size, source) = match self.socket.recv_from(&mut buf) {
                Ok(received) => received,
                Err(e) => {
                    error!(error = %e, "error receiving data");
                    return Err(e).context("receive failed");
                }
            };

            debug!(size, %source, "received datagram");

            match inspect_datagram(&buf[..size]) {
                Ok(rendered) => println!("{}\n", rendered),
                Err(e) => warn!(%source, error = %e, "dropping undecodable datagram"),
            }
        }
    }
}
