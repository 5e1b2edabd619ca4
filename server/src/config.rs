//! Server configuration, read from the environment.

use std::{
    env,
    net::{AddrParseError, Ipv4Addr, SocketAddr, SocketAddrV4},
    path::PathBuf,
};
use thiserror::Error;

/// The variable holding the address to bind.
const ADDRESS_VAR: &str = "BOOKSHELF_ADDRESS";
/// The variable holding the path of the seed file.
const SEED_PATH_VAR: &str = "BOOKSHELF_SEED_PATH";

/// Used when [`ADDRESS_VAR`] is not set.
const DEFAULT_ADDRESS: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
/// Used when [`SEED_PATH_VAR`] is not set.
const DEFAULT_SEED_PATH: &str = "./bookData";

/// Errors that may occur when reading the configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// The bind address could not be parsed.
    #[error("BOOKSHELF_ADDRESS={value:?} is not a socket address: {source}")]
    InvalidAddress {
        /// The value that was read.
        value: String,
        /// The source error.
        #[source]
        source: AddrParseError,
    },
}

/// Everything the server needs to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    /// The address to listen on.
    pub(crate) address: SocketAddr,
    /// The file to load the initial books from.
    pub(crate) seed_path: PathBuf,
}

impl ServerConfig {
    /// Read the configuration from environment variables, falling back to defaults for any that
    /// are unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something that cannot be parsed.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let address = match lookup(ADDRESS_VAR) {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidAddress { value, source })?,
            None => DEFAULT_ADDRESS,
        };
        let seed_path = lookup(SEED_PATH_VAR)
            .map_or_else(|| PathBuf::from(DEFAULT_SEED_PATH), PathBuf::from);

        Ok(Self { address, seed_path })
    }
}
