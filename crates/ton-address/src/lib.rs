//! # ton-address
//!
//! TON account addresses as handed out by wallets.
//!
//! A standard TON account is identified by a workchain id and a 256-bit
//! account hash. Wallets and explorers show it in one of two forms:
//!
//! - **Raw**: `workchain:hex` (e.g. `0:83df...`), used on the wire by
//!   TON Connect.
//! - **User-friendly**: 48 characters of URL-safe base64 covering a flags
//!   byte, the workchain byte, the hash and a CRC16-XMODEM checksum
//!   (e.g. `EQ...` bounceable, `UQ...` non-bounceable).
//!
//! ## Example
//!
//! ```
//! use ton_address::TonAddress;
//!
//! let raw = "0:1111111111111111111111111111111111111111111111111111111111111111";
//! let addr: TonAddress = raw.parse().unwrap();
//! assert_eq!(addr.workchain(), 0);
//!
//! let friendly = addr.to_user_friendly(true, false);
//! assert!(friendly.starts_with("EQ"));
//! assert_eq!(TonAddress::parse(&friendly).unwrap(), addr);
//! ```

pub mod address;
pub mod error;

pub use address::{crc16_xmodem, FriendlyFlags, TonAddress};
pub use error::{AddressError, AddressResult};
