#[cfg(test)]
pub mod fixed;
pub mod os;

use log::{debug, warn};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A network interface known to a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub index: u32,
}

/// One address entry assigned to an interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IfAddr {
    V4 {
        addr: Ipv4Addr,
        netmask: Option<Ipv4Addr>,
    },
    V6(Ipv6Addr),
    /// Link-layer or other non-IP entry.
    Other,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("interface {name} not found")]
    InterfaceNotFound { name: String },
    #[error("cannot get addresses for {name}: {source}")]
    AddressQueryFailed {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("no IPv4 address found on interface {name}")]
    NoIpv4Address { name: String },
}

/// Source of interface and address information, usually the OS.
pub trait NetworkInterfaceProvider {
    fn interface_by_name(&self, name: &str) -> Result<Interface, Error>;
    /// Address entries of `interface`, in the order the provider enumerates them.
    fn addresses(&self, interface: &Interface) -> Result<Vec<IfAddr>, Error>;
}

/// Sets every host bit of `addr` that `netmask` leaves clear.
pub fn broadcast_address(addr: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    let mut octets = addr.octets();
    for (octet, mask) in octets.iter_mut().zip(netmask.octets()) {
        *octet |= !mask;
    }
    Ipv4Addr::from(octets)
}

/// Derives the directed broadcast address of the first IPv4 address on
/// `name`. Multi-homed interfaces resolve by provider enumeration order.
pub fn resolve_broadcast(
    provider: &dyn NetworkInterfaceProvider,
    name: &str,
) -> Result<Ipv4Addr, Error> {
    let interface = provider.interface_by_name(name)?;
    let addrs = provider.addresses(&interface)?;
    debug!("{} has addresses {:?}", interface.name, addrs);

    for addr in addrs {
        if let IfAddr::V4 { addr, netmask } = addr {
            let netmask = netmask.unwrap_or_else(|| {
                warn!("{} has no netmask on {}, assuming /32", addr, interface.name);
                Ipv4Addr::BROADCAST
            });
            let broadcast = broadcast_address(addr, netmask);
            debug!(
                "broadcast for {} is {} ({}/{})",
                interface.name, broadcast, addr, netmask
            );
            return Ok(broadcast);
        }
    }
    Err(Error::NoIpv4Address {
        name: interface.name,
    })
}
