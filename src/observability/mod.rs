//! Optional file-based logging for the store.

mod init;

pub use init::init_tracing;
