use futures::future::BoxFuture;

use crate::phonenumberutil::{errors::LoadError, region_data::RegionRecord, region_locator::LocatorRecord};

/// Source of numbering data, used to isolate the engine from where the data
/// lives so that compiled-in, file based or remote data can be swapped in.
///
/// Loads are futures; the engine blocks on them only in its synchronous
/// entry points.
pub trait DataLoader: Send + Sync {
    /// Data file of one region. `Ok(None)` means the source has no data for
    /// the region and the engine should fall back to the default plan.
    fn load_region<'a>(
        &'a self,
        region: &'a str,
    ) -> BoxFuture<'a, Result<Option<RegionRecord>, LoadError>>;

    /// Region, calling code and mobile country code mappings.
    fn load_locator(&self) -> BoxFuture<'_, Result<LocatorRecord, LoadError>>;
}
