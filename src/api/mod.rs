//! FlyBase GraphQL API access.
//!
//! [`client`] wraps a blocking HTTP client with the request/response
//! envelope and retry handling shared by all queries; [`constructs`] holds
//! the construct-allele query and its report rendering.

pub mod client;
pub mod constructs;

pub use client::{ApiError, FlyBaseClient, DEFAULT_ENDPOINT};
pub use constructs::{fetch_construct_alleles, write_report, GeneAlleles};
