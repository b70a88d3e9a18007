//! Library components of the `edupaz` command line host.

pub mod logging;
pub mod store;
