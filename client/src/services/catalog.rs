//! Category catalog: the server-defined options of categorical fields
//!
//! Loaded at most once and read-only afterwards, so one catalog can back
//! every form on the page.

use shared::{CategoryField, CategoryOptions};
use tokio::sync::OnceCell;

use crate::error::ClientResult;
use crate::external::PredictionClient;

/// Banner shown when the categories could not be fetched
pub const CATALOG_UNAVAILABLE: &str = "Failed to load categories";

/// Cached categorical option lists
pub struct CategoryCatalog {
    client: PredictionClient,
    options: OnceCell<CategoryOptions>,
}

impl CategoryCatalog {
    pub fn new(client: PredictionClient) -> Self {
        Self {
            client,
            options: OnceCell::new(),
        }
    }

    /// Fetch the option lists, or return the cached ones.
    ///
    /// A failed fetch leaves the catalog empty.
    pub async fn load(&self) -> ClientResult<&CategoryOptions> {
        let result = self
            .options
            .get_or_try_init(|| async {
                let options = self.client.categories().await?;
                tracing::info!(
                    regions = options.region.len(),
                    soil_types = options.soil_type.len(),
                    crops = options.crop.len(),
                    weather_conditions = options.weather_condition.len(),
                    "Loaded category catalog"
                );
                Ok(options)
            })
            .await;

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Category catalog unavailable");
        }
        result
    }

    /// Loaded options, if any
    pub fn get(&self) -> Option<&CategoryOptions> {
        self.options.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.options.initialized()
    }

    /// Options of one field; empty until loaded
    pub fn options(&self, field: CategoryField) -> &[String] {
        self.get().map(|o| o.options(field)).unwrap_or(&[])
    }
}
