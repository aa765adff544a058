use std::fmt;
use std::str::FromStr;

const MAC_ADDRESS_LEN: usize = 6;
const SEPARATORS: &[char] = &[':', '-'];

/// A 6 octet hardware address, parsed from `aa:bb:cc:dd:ee:ff`,
/// `AA-BB-CC-DD-EE-FF` or any mix of those separators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MacAddress([u8; MAC_ADDRESS_LEN]);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid MAC address format: expected 12 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid MAC address format: {0:?} is not a hex digit")]
    InvalidDigit(char),
}

impl MacAddress {
    pub const fn new(octets: [u8; MAC_ADDRESS_LEN]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; MAC_ADDRESS_LEN] {
        self.0
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if digits.len() != MAC_ADDRESS_LEN * 2 {
            return Err(Error::InvalidLength(digits.len()));
        }
        // from_str_radix would also accept a leading '+', so check digits up front.
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidDigit(bad));
        }

        let mut octets = [0u8; MAC_ADDRESS_LEN];
        for (i, octet) in octets.iter_mut().enumerate() {
            let pair = &digits[i * 2..i * 2 + 2];
            *octet = u8::from_str_radix(pair, 16)
                .map_err(|_| Error::InvalidDigit(pair.chars().next().unwrap_or('?')))?;
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}
