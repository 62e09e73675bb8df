//! Collaborator seams: cancellation and asset fetching.

pub mod asset_fetcher;
pub mod cancellation;

pub use asset_fetcher::{AssetFetcher, StaticAssetFetcher};
pub use cancellation::{Cancellable, CancellationToken};
