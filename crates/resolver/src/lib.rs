mod models;
mod matcher;
mod decode;
mod listing;
mod resolve;
mod metadata;
mod enumerate;
mod errors;

pub use models::{Resolver, ScanIssue, ScanReport};
pub use matcher::{flexible_match, FlexibleMatch};
pub use decode::decode_subtitle;
pub use errors::ResolveError;
