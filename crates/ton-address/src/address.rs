//! Standard TON account address.
//!
//! Only `addr_std` addresses are modelled here: that is what a connected
//! wallet reports for its account and what transaction messages target.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AddressError, AddressResult};

/// Tag byte of a bounceable user-friendly address.
const TAG_BOUNCEABLE: u8 = 0x11;
/// Tag byte of a non-bounceable user-friendly address.
const TAG_NON_BOUNCEABLE: u8 = 0x51;
/// Bit set in the tag byte for testnet-only addresses.
const TAG_TESTNET: u8 = 0x80;

/// Length of the user-friendly text form.
pub const USER_FRIENDLY_LEN: usize = 48;

/// Flags carried by the tag byte of a user-friendly address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FriendlyFlags {
    /// Messages to this address bounce on failure.
    pub bounceable: bool,
    /// Address is meant for testnet only.
    pub testnet: bool,
}

impl FriendlyFlags {
    fn from_tag(tag: u8) -> AddressResult<Self> {
        let testnet = tag & TAG_TESTNET != 0;
        let bounceable = match tag & !TAG_TESTNET {
            TAG_BOUNCEABLE => true,
            TAG_NON_BOUNCEABLE => false,
            _ => return Err(AddressError::InvalidTag(tag)),
        };
        Ok(Self { bounceable, testnet })
    }

    fn tag(self) -> u8 {
        let mut tag = if self.bounceable {
            TAG_BOUNCEABLE
        } else {
            TAG_NON_BOUNCEABLE
        };
        if self.testnet {
            tag |= TAG_TESTNET;
        }
        tag
    }
}

/// TON account address (workchain + 256-bit account hash).
///
/// `Display` and serde use the raw `workchain:hex` form. The workchain is an
/// 8-bit id, the width the user-friendly form encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TonAddress {
    workchain: i8,
    hash: [u8; 32],
}

impl TonAddress {
    /// Creates an address from its parts.
    pub fn new(workchain: i8, hash: [u8; 32]) -> Self {
        Self { workchain, hash }
    }

    /// Parses either the raw or the user-friendly form.
    pub fn parse(s: &str) -> AddressResult<Self> {
        let s = s.trim();

        if s.is_empty() {
            return Err(AddressError::Empty);
        }

        if s.contains(':') {
            return Self::from_raw(s);
        }

        if s.len() == USER_FRIENDLY_LEN {
            return Self::from_user_friendly(s).map(|(addr, _)| addr);
        }

        Err(AddressError::UnrecognizedFormat(s.to_string()))
    }

    /// Parses the raw form `workchain:hex`.
    pub fn from_raw(s: &str) -> AddressResult<Self> {
        let (workchain_str, hash_str) = s
            .split_once(':')
            .ok_or_else(|| AddressError::UnrecognizedFormat(s.to_string()))?;

        let workchain: i8 = workchain_str
            .parse()
            .map_err(|_| AddressError::InvalidWorkchain(workchain_str.to_string()))?;

        if hash_str.len() != 64 {
            return Err(AddressError::InvalidHash(format!(
                "expected 64 hex characters, got {}",
                hash_str.len()
            )));
        }

        let mut hash = [0u8; 32];
        hex::decode_to_slice(hash_str, &mut hash)
            .map_err(|e| AddressError::InvalidHash(e.to_string()))?;

        Ok(Self { workchain, hash })
    }

    /// Parses the user-friendly form and returns the flags it carried.
    ///
    /// Both the URL-safe and the standard base64 alphabets are accepted.
    pub fn from_user_friendly(s: &str) -> AddressResult<(Self, FriendlyFlags)> {
        let standard: String = s
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();

        let bytes = STANDARD
            .decode(standard.as_bytes())
            .map_err(|e| AddressError::InvalidBase64(e.to_string()))?;

        if bytes.len() != 36 {
            return Err(AddressError::InvalidLength(bytes.len()));
        }

        let expected = u16::from_be_bytes([bytes[34], bytes[35]]);
        let actual = crc16_xmodem(&bytes[..34]);
        if expected != actual {
            return Err(AddressError::ChecksumMismatch { expected, actual });
        }

        let flags = FriendlyFlags::from_tag(bytes[0])?;
        let workchain = bytes[1] as i8;
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&bytes[2..34]);

        Ok((Self { workchain, hash }, flags))
    }

    /// Raw form `workchain:hex`.
    pub fn to_raw_string(&self) -> String {
        format!("{}:{}", self.workchain, hex::encode(self.hash))
    }

    /// User-friendly URL-safe base64 form.
    pub fn to_user_friendly(&self, bounceable: bool, testnet: bool) -> String {
        let flags = FriendlyFlags {
            bounceable,
            testnet,
        };

        let mut data = Vec::with_capacity(36);
        data.push(flags.tag());
        data.push(self.workchain as u8);
        data.extend_from_slice(&self.hash);

        let crc = crc16_xmodem(&data);
        data.extend_from_slice(&crc.to_be_bytes());

        URL_SAFE_NO_PAD.encode(&data)
    }

    /// Workchain id (-1 for masterchain, 0 for basechain).
    pub fn workchain(&self) -> i32 {
        i32::from(self.workchain)
    }

    /// 256-bit account hash.
    pub fn hash_part(&self) -> &[u8; 32] {
        &self.hash
    }

    pub fn is_masterchain(&self) -> bool {
        self.workchain == -1
    }

    pub fn is_basechain(&self) -> bool {
        self.workchain == 0
    }
}

impl fmt::Display for TonAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw_string())
    }
}

impl FromStr for TonAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TonAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_raw_string())
    }
}

impl<'de> Deserialize<'de> for TonAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// CRC16-XMODEM checksum.
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "0:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8";

    #[test]
    fn test_parse_raw() {
        let addr = TonAddress::parse(RAW).unwrap();
        assert!(addr.is_basechain());
        assert_eq!(addr.hash_part()[0], 0x83);
        assert_eq!(addr.hash_part()[31], 0xa8);
        assert_eq!(addr.to_raw_string(), RAW);
    }

    #[test]
    fn test_parse_raw_masterchain() {
        let s = "-1:0000000000000000000000000000000000000000000000000000000000000000";
        let addr = TonAddress::parse(s).unwrap();
        assert!(addr.is_masterchain());
        assert_eq!(addr.to_string(), s);
    }

    #[test]
    fn test_raw_rejects_bad_input() {
        assert_eq!(TonAddress::parse("   "), Err(AddressError::Empty));
        assert!(matches!(
            TonAddress::parse("x:00"),
            Err(AddressError::InvalidWorkchain(_))
        ));
        assert!(matches!(
            TonAddress::parse("0:abcd"),
            Err(AddressError::InvalidHash(_))
        ));
        let not_hex = format!("0:{}", "zz".repeat(32));
        assert!(matches!(
            TonAddress::parse(&not_hex),
            Err(AddressError::InvalidHash(_))
        ));
        assert!(matches!(
            TonAddress::parse("hello"),
            Err(AddressError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_raw_rejects_out_of_range_workchain() {
        let hash = "11".repeat(32);
        for wc in ["300", "128", "-129", "2147483647"] {
            assert_eq!(
                TonAddress::parse(&format!("{}:{}", wc, hash)),
                Err(AddressError::InvalidWorkchain(wc.to_string()))
            );
        }

        let edge = TonAddress::parse(&format!("127:{}", hash)).unwrap();
        assert_eq!(edge.workchain(), 127);
        let friendly = edge.to_user_friendly(true, false);
        assert_eq!(TonAddress::parse(&friendly).unwrap(), edge);

        let low = TonAddress::parse(&format!("-128:{}", hash)).unwrap();
        assert_eq!(TonAddress::parse(&low.to_user_friendly(false, false)).unwrap(), low);
    }

    #[test]
    fn test_user_friendly_prefixes() {
        let base = TonAddress::new(0, [0x42; 32]);
        assert!(base.to_user_friendly(true, false).starts_with("EQ"));
        assert!(base.to_user_friendly(false, false).starts_with("UQ"));
        assert!(base.to_user_friendly(true, true).starts_with("kQ"));
        assert!(base.to_user_friendly(false, true).starts_with("0Q"));

        let master = TonAddress::new(-1, [0x42; 32]);
        assert!(master.to_user_friendly(true, false).starts_with("Ef"));
    }

    #[test]
    fn test_user_friendly_flags() {
        let addr = TonAddress::new(0, [0x07; 32]);
        let friendly = addr.to_user_friendly(false, true);
        assert_eq!(friendly.len(), USER_FRIENDLY_LEN);

        let (parsed, flags) = TonAddress::from_user_friendly(&friendly).unwrap();
        assert_eq!(parsed, addr);
        assert!(!flags.bounceable);
        assert!(flags.testnet);
    }

    #[test]
    fn test_user_friendly_standard_alphabet() {
        // 0xfb bytes force '-' and '_' into the URL-safe encoding
        let addr = TonAddress::new(0, [0xfb; 32]);
        let friendly = addr.to_user_friendly(true, false);
        let standard: String = friendly
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();
        assert_eq!(TonAddress::parse(&standard).unwrap(), addr);
    }

    #[test]
    fn test_user_friendly_checksum_mismatch() {
        let addr = TonAddress::new(0, [0x10; 32]);
        let mut friendly: Vec<char> = addr.to_user_friendly(true, false).chars().collect();
        friendly[20] = if friendly[20] == 'A' { 'B' } else { 'A' };
        let tampered: String = friendly.into_iter().collect();

        assert!(matches!(
            TonAddress::parse(&tampered),
            Err(AddressError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_serde_uses_raw_form() {
        let addr = TonAddress::parse(RAW).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", RAW));

        let friendly = format!("\"{}\"", addr.to_user_friendly(true, false));
        let back: TonAddress = serde_json::from_str(&friendly).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_crc16_xmodem() {
        assert_eq!(crc16_xmodem(b"123456789"), 0x31C3);
    }
}
