use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
};
use log::{debug, warn};

use crate::{
    interfaces::DataLoader,
    phonenumberutil::{errors::LoadError, region_data::RegionData, region_locator::RegionLocator},
};

type LoadResult = Result<Arc<RegionData>, LoadError>;
type PendingLoad = Shared<BoxFuture<'static, LoadResult>>;

/// Process-wide cache of region data.
///
/// Finished entries are read without waiting. A region that is being loaded
/// has exactly one load in flight, and every caller asking for it meanwhile
/// awaits that same load.
pub struct RegionDataCache {
    loader: Arc<dyn DataLoader>,
    locator: Arc<RegionLocator>,
    loaded: DashMap<String, Arc<RegionData>>,
    pending: DashMap<String, PendingLoad>,
}

impl RegionDataCache {
    pub fn new(loader: Arc<dyn DataLoader>, locator: Arc<RegionLocator>) -> Self {
        Self {
            loader,
            locator,
            loaded: DashMap::new(),
            pending: DashMap::new(),
        }
    }

    /// Data of `region`, loading it on first use. Region codes are matched
    /// case-insensitively, and regions that share another region's data get
    /// that data under their own code.
    pub async fn get(&self, region: &str) -> LoadResult {
        let key = region.to_ascii_uppercase();
        if let Some(data) = self.loaded.get(&key) {
            return Ok(data.value().clone());
        }
        let data_region = self.locator.data_region(&key);
        if data_region == key {
            return self.get_own(&key).await;
        }
        debug!("Region '{key}' uses the data of '{data_region}'");
        let shared = self.get_own(data_region).await?;
        let data = self
            .loaded
            .entry(key.clone())
            .or_insert_with(|| Arc::new(shared.shared_as(&key)))
            .value()
            .clone();
        Ok(data)
    }

    /// Data that is already loaded, without starting a load.
    pub fn get_loaded(&self, region: &str) -> Option<Arc<RegionData>> {
        self.loaded
            .get(&region.to_ascii_uppercase())
            .map(|data| data.value().clone())
    }

    async fn get_own(&self, key: &str) -> LoadResult {
        if let Some(data) = self.loaded.get(key) {
            return Ok(data.value().clone());
        }
        let load = match self.pending.entry(key.to_owned()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                // the load may have finished between the two lookups
                if let Some(data) = self.loaded.get(key) {
                    return Ok(data.value().clone());
                }
                let load = load_region(self.loader.clone(), key.to_owned())
                    .boxed()
                    .shared();
                entry.insert(load.clone());
                load
            }
        };

        let result = load.clone().await;
        if let Ok(data) = &result {
            self.loaded
                .entry(key.to_owned())
                .or_insert_with(|| data.clone());
        }
        // only forget the load we awaited, a retry may have replaced it
        self.pending
            .remove_if(key, |_, pending| pending.ptr_eq(&load));
        result
    }
}

async fn load_region(loader: Arc<dyn DataLoader>, region: String) -> LoadResult {
    debug!("Loading data for region '{region}'");
    match loader.load_region(&region).await {
        Ok(Some(record)) => RegionData::from_record(&region, record).map(Arc::new),
        Ok(None) => {
            debug!("No data for region '{region}', using the default plan");
            Ok(Arc::new(RegionData::fallback(&region)))
        }
        Err(err) if err.is_unavailable() => {
            warn!("{err}, using the default plan");
            Ok(Arc::new(RegionData::fallback(&region)))
        }
        Err(err) => Err(err),
    }
}
