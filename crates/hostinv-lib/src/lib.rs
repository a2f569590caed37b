//! hostinv library entry points.
//!
//! This crate holds everything below the HTTP layer of the host inventory
//! service: the `Host` data model and its wire wrappers, opaque document
//! identifiers, the document-store interface with its in-process
//! implementation, and the `HostRepo` repository that ties them together.
//! HTTP consumers should only depend on the types exported here.

#![deny(warnings)]

pub mod id;
pub mod memory;
pub mod model;
pub mod repo;
pub mod store;

pub use id::DocumentId;
pub use memory::MemoryStore;
pub use model::{Host, HostCollection, HostResource, IpAddresses, Provider, ResourceSpecs, Sensor};
pub use repo::HostRepo;
pub use store::{DocumentStore, StoreError};
