use crate::mac::{self, MacAddress};
use log::info;
use std::io;
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

const SYNCHRONIZATION_SCHEME: [u8; 6] = [0xff; 6];
const MAC_REPETITIONS: usize = 16;
pub const MAGIC_PACKET_LEN: usize = SYNCHRONIZATION_SCHEME.len() + MAC_REPETITIONS * 6;

/// Conventional discard port most WoL listeners expect.
pub const DEFAULT_PORT: u16 = 9;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to connect to target: {0}")]
    ConnectionFailed(#[source] io::Error),
    #[error("Failed to send magic packet: {0}")]
    SendFailed(#[source] io::Error),
}

/// Six 0xff bytes followed by the target MAC repeated sixteen times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicPacket([u8; MAGIC_PACKET_LEN]);

impl MagicPacket {
    pub fn new(mac_address: &MacAddress) -> Self {
        let mut data = [0u8; MAGIC_PACKET_LEN];
        data[..SYNCHRONIZATION_SCHEME.len()].copy_from_slice(&SYNCHRONIZATION_SCHEME);
        for chunk in data[SYNCHRONIZATION_SCHEME.len()..].chunks_exact_mut(6) {
            chunk.copy_from_slice(&mac_address.octets());
        }
        Self(data)
    }

    pub fn build(mac_address: &str) -> Result<Self, mac::Error> {
        Ok(Self::new(&mac_address.parse()?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Sends one magic packet as a single datagram to `target`.
pub fn wake(packet: &MagicPacket, target: SocketAddrV4) -> Result<(), Error> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(Error::ConnectionFailed)?;
    socket.set_broadcast(true).map_err(Error::ConnectionFailed)?;
    socket.connect(target).map_err(Error::ConnectionFailed)?;

    let sent = socket.send(packet.as_bytes()).map_err(Error::SendFailed)?;
    if sent != MAGIC_PACKET_LEN {
        return Err(Error::SendFailed(io::Error::new(
            io::ErrorKind::WriteZero,
            format!("only {sent} of {MAGIC_PACKET_LEN} bytes sent"),
        )));
    }
    info!("sent {} byte magic packet to {}", sent, target);
    Ok(())
}
