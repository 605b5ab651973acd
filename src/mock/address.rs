use std::fmt;

use crate::net::Addr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MockAddress {
    network: String,
    address: String,
}

impl MockAddress {
    pub fn new(network: impl Into<String>, address: impl Into<String>) -> MockAddress {
        MockAddress {
            network: network.into(),
            address: address.into(),
        }
    }
}

impl Addr for MockAddress {
    fn network(&self) -> &str {
        &self.network
    }

    fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for MockAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
