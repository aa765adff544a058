use crate::netif::{Error, IfAddr, Interface, NetworkInterfaceProvider};
use log::debug;
use nix::ifaddrs::{getifaddrs, InterfaceAddress};
use nix::net::if_::if_nametoindex;
use nix::sys::socket::SockaddrLike;
use std::net::{SocketAddrV4, SocketAddrV6};

/// Queries the running kernel through `if_nametoindex(3)` and `getifaddrs(3)`.
pub struct OsInterfaces;

fn to_if_addr(ifaddr: &InterfaceAddress) -> IfAddr {
    let Some(address) = ifaddr.address.as_ref() else {
        return IfAddr::Other;
    };
    if let Some(sin) = address.as_sockaddr_in() {
        let netmask = ifaddr
            .netmask
            .as_ref()
            .and_then(|mask| mask.as_sockaddr_in())
            .map(|mask| *SocketAddrV4::from(*mask).ip());
        return IfAddr::V4 {
            addr: *SocketAddrV4::from(*sin).ip(),
            netmask,
        };
    }
    if let Some(sin6) = address.as_sockaddr_in6() {
        return IfAddr::V6(*SocketAddrV6::from(*sin6).ip());
    }
    debug!(
        "skipping {} entry with family {:?}",
        ifaddr.interface_name,
        address.family()
    );
    IfAddr::Other
}

impl NetworkInterfaceProvider for OsInterfaces {
    fn interface_by_name(&self, name: &str) -> Result<Interface, Error> {
        let index = if_nametoindex(name).map_err(|errno| {
            debug!("if_nametoindex({}) failed: {}", name, errno);
            Error::InterfaceNotFound {
                name: name.to_string(),
            }
        })?;
        Ok(Interface {
            name: name.to_string(),
            index,
        })
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<IfAddr>, Error> {
        let addrs = getifaddrs().map_err(|errno| Error::AddressQueryFailed {
            name: interface.name.clone(),
            source: errno.into(),
        })?;
        Ok(addrs
            .filter(|ifaddr| ifaddr.interface_name == interface.name)
            .map(|ifaddr| to_if_addr(&ifaddr))
            .collect())
    }
}
