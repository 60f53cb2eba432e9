//! Shared utilities: interning, configuration, hashing, externals lists.

pub mod config;
pub mod externals;
pub mod hash;
pub mod interning;

pub use config::Config;
pub use externals::ExternalsList;
pub use hash::{encode_digest, sha1_file, DigestLengthError};
pub use interning::Symbol;
