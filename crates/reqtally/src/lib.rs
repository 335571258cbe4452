//! Top-level facade crate for reqtally.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use reqtally_core::*;
}

pub mod server {
    pub use reqtally_server::*;
}
