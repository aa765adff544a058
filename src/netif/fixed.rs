use crate::netif::{Error, IfAddr, Interface, NetworkInterfaceProvider};
use log::info;
use std::io;

/// Provider backed by a fixed interface table instead of the OS, for tests.
#[derive(Default)]
pub struct FixedInterfaces {
    interfaces: Vec<(String, Option<Vec<IfAddr>>)>,
}

impl FixedInterfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface(mut self, name: &str, addrs: Vec<IfAddr>) -> Self {
        self.interfaces.push((name.to_string(), Some(addrs)));
        self
    }

    /// Adds an interface whose address query fails.
    pub fn with_failing_interface(mut self, name: &str) -> Self {
        self.interfaces.push((name.to_string(), None));
        self
    }
}

impl NetworkInterfaceProvider for FixedInterfaces {
    fn interface_by_name(&self, name: &str) -> Result<Interface, Error> {
        info!("looking up fixed interface {}", name);
        self.interfaces
            .iter()
            .position(|(n, _)| n == name)
            .map(|i| Interface {
                name: name.to_string(),
                index: i as u32 + 1,
            })
            .ok_or_else(|| Error::InterfaceNotFound {
                name: name.to_string(),
            })
    }

    fn addresses(&self, interface: &Interface) -> Result<Vec<IfAddr>, Error> {
        let entry = self
            .interfaces
            .iter()
            .find(|(n, _)| *n == interface.name)
            .ok_or_else(|| Error::InterfaceNotFound {
                name: interface.name.clone(),
            })?;
        entry.1.clone().ok_or_else(|| Error::AddressQueryFailed {
            name: interface.name.clone(),
            source: io::Error::new(io::ErrorKind::Other, "scripted address query failure"),
        })
    }
}
