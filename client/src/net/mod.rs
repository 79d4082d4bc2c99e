//! Backend REST plumbing: wire types, transport seam, and resource façade.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
