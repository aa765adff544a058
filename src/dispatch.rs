use crate::mac;
use crate::netif::{self, NetworkInterfaceProvider};
use crate::wol::{self, MagicPacket};
use clap::Parser;
use log::debug;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

pub const USAGE: &str = "Usage: wol [-p PORT=9] [-i IP=255.255.255.255] [--if IFACE] MAC
Example: wol -p 9 -i 192.168.1.255 01:23:45:67:89:ab
      or wol -p 9 --if br0 01:23:45:67:89:ab";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target MAC address, in xx:xx:xx:xx:xx:xx or xx-xx-xx-xx-xx-xx form.
    pub mac: Option<String>,

    /// Port
    #[arg(short = 'p', value_name = "PORT", default_value_t = wol::DEFAULT_PORT)]
    pub port: u16,

    /// Broadcast IP address
    #[arg(short = 'i', value_name = "IP", default_value_t = Ipv4Addr::BROADCAST)]
    pub ip: Ipv4Addr,

    /// Network interface name (optional, e.g. br0). Overrides -i with the
    /// interface's broadcast address.
    #[arg(long = "if", value_name = "IFACE")]
    pub interface: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing MAC address")]
    Usage,
    #[error("Failed to get broadcast IP from interface: {0}")]
    Interface(#[from] netif::Error),
    #[error("Failed to generate magic packet: {0}")]
    Packet(#[from] mac::Error),
    #[error(transparent)]
    Transmit(#[from] wol::Error),
}

/// What was sent, for the confirmation line.
#[derive(Debug, PartialEq)]
pub struct Sent {
    pub target: SocketAddrV4,
    pub mac: String,
}

impl fmt::Display for Sent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Sent WOL magic packet to {} port {} (MAC: {})",
            self.target.ip(),
            self.target.port(),
            self.mac
        )
    }
}

pub fn run(args: &Args, interfaces: &dyn NetworkInterfaceProvider) -> Result<Sent, Error> {
    let mac = args.mac.as_deref().ok_or(Error::Usage)?;

    // An empty --if counts as unset.
    let ip = match args.interface.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => {
            let broadcast = netif::resolve_broadcast(interfaces, name)?;
            debug!("using broadcast {} of {} instead of {}", broadcast, name, args.ip);
            broadcast
        }
        None => args.ip,
    };

    let packet = MagicPacket::build(mac)?;
    let target = SocketAddrV4::new(ip, args.port);
    wol::wake(&packet, target)?;

    Ok(Sent {
        target,
        mac: mac.to_string(),
    })
}
