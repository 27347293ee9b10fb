use std::net::{ToSocketAddrs, UdpSocket};

use thiserror::Error;

/// Errors returned by the one-shot UDP transport.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot resolve destination '{dest}'")]
    Resolve { dest: String },
}

/// Send `payload` to `host:port` as a single datagram.
///
/// The socket is bound to an ephemeral local port, used for exactly one
/// `send_to`, and dropped when the call returns, success or not.
/// Fire-and-forget: no reply is read and nothing is retried.
pub fn send_message(host: &str, port: u16, payload: &[u8]) -> Result<usize, SendError> {
    let dest = format!("{host}:{port}");
    let addr = dest
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| SendError::Resolve { dest: dest.clone() })?;

    let socket = UdpSocket::bind("0.0.0.0:0")?;
    let sent = socket.send_to(payload, addr)?;
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use super::{SendError, send_message};

    #[test]
    fn sends_payload_to_loopback() {
        let receiver = UdpSocket::bind("127.0.0.1:0").expect("bind receiver");
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .expect("set timeout");
        let port = receiver.local_addr().expect("local addr").port();

        let payload = b"/ping\x00\x00\x00,\x00\x00\x00";
        let sent = send_message("127.0.0.1", port, payload).expect("send");
        assert_eq!(sent, payload.len());

        let mut buf = [0u8; 64];
        let (len, _) = receiver.recv_from(&mut buf).expect("recv");
        assert_eq!(&buf[..len], payload);
    }

    #[test]
    fn unresolvable_host_is_reported() {
        let err = send_message("definitely-not-a-host.invalid", 57121, b"x").unwrap_err();
        match err {
            SendError::Io(_) | SendError::Resolve { .. } => {}
        }
        assert!(!err.to_string().is_empty());
    }
}
