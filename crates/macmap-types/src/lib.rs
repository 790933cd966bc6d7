//! Common macmap types for switch CLI table processing.
//!
//! This crate provides small value types shared by the parser and the
//! report collaborators:
//!
//! - [`Oui`]: the 24-bit vendor prefix of a MAC address, used as the
//!   vendor lookup key
//! - [`PortKind`]: physical interface vs port-channel classification

mod oui;
mod port;

pub use oui::Oui;
pub use port::PortKind;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("invalid OUI format: {0}")]
    InvalidOui(String),
}
