//! Product catalog and spot price fetchers.
//!
//! Both fetches are fire-and-forget from the page's point of view: a failure
//! is logged and leaves the corresponding slot empty. Nothing here ever
//! produces an error for a visitor to see.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::BullionApi;
use crate::content;
use crate::lifecycle::Scope;
use crate::model::{Product, SpotPrice};

/// Number of products the home page features.
pub const FEATURED_COUNT: usize = 4;

/// Where the product list comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSource {
    /// Fetch products and the spot price from the backend.
    #[default]
    Remote,
    /// Use the built-in product list; no spot price.
    Static,
}

impl std::str::FromStr for ProductSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "static" => Ok(Self::Static),
            other => Err(format!("unknown product source '{other}'")),
        }
    }
}

/// What a page knows about the catalog. Starts empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub spot_price: Option<SpotPrice>,
}

impl Catalog {
    /// The catalog the static site variant renders.
    #[must_use]
    pub fn from_static() -> Self {
        Self {
            products: content::static_products(),
            spot_price: None,
        }
    }

    /// Products for the home page: the first [`FEATURED_COUNT`], in order.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        &self.products[..self.products.len().min(FEATURED_COUNT)]
    }
}

/// Fetch the product list. Any failure yields an empty list.
pub async fn fetch_products(api: &dyn BullionApi, scope: &Scope) -> Vec<Product> {
    match scope.guard(api.list_products()).await {
        Some(Ok(products)) => {
            debug!(count = products.len(), "products loaded");
            products
        }
        Some(Err(e)) => {
            warn!(error = %e, "product fetch failed");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Fetch the spot price. Any failure yields `None`.
pub async fn fetch_spot_price(api: &dyn BullionApi, scope: &Scope) -> Option<SpotPrice> {
    match scope.guard(api.spot_price()).await {
        Some(Ok(spot)) => Some(spot),
        Some(Err(e)) => {
            warn!(error = %e, "spot price fetch failed");
            None
        }
        None => None,
    }
}

/// Load the whole catalog for `source`, running both fetches concurrently.
pub async fn load(api: &dyn BullionApi, scope: &Scope, source: ProductSource) -> Catalog {
    match source {
        ProductSource::Static => Catalog::from_static(),
        ProductSource::Remote => {
            let (products, spot_price) =
                tokio::join!(fetch_products(api, scope), fetch_spot_price(api, scope));
            Catalog {
                products,
                spot_price,
            }
        }
    }
}

/// Page-local catalog state, filled in as each fetch completes.
///
/// Readers never wait: before the fetches land they simply see an empty
/// catalog.
#[derive(Debug)]
pub struct CatalogStore {
    state: Arc<watch::Sender<Catalog>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(watch::channel(Catalog::default()).0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Catalog> {
        self.state.subscribe()
    }

    /// Start loading in the background. The two fetches are independent and
    /// each result is published as soon as it arrives. Results arriving
    /// after `scope` is unmounted are dropped.
    pub fn spawn_load(
        &self,
        api: Arc<dyn BullionApi>,
        scope: Scope,
        source: ProductSource,
    ) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            if source == ProductSource::Static {
                state.send_replace(Catalog::from_static());
                return;
            }

            let products = async {
                let products = fetch_products(api.as_ref(), &scope).await;
                if scope.is_mounted() {
                    state.send_modify(|c| c.products = products);
                }
            };
            let spot = async {
                let spot = fetch_spot_price(api.as_ref(), &scope).await;
                if scope.is_mounted() {
                    state.send_modify(|c| c.spot_price = spot);
                }
            };
            tokio::join!(products, spot);
        })
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lifecycle::Mount;
    use crate::model::{Weight, WeightUnit};
    use crate::stub::{StubApi, StubFailure};

    fn bar(id: &str) -> Product {
        Product {
            id: id.to_owned(),
            name: format!("Bar {id}"),
            weight: Weight {
                magnitude: "1".to_owned(),
                unit: WeightUnit::Kilogram,
            },
            purity: "999.9".to_owned(),
            certification: "LBMA Certified".to_owned(),
            description: String::new(),
            image_url: String::new(),
            category: None,
        }
    }

    fn spot() -> SpotPrice {
        SpotPrice {
            gold_price_usd: 2650.5,
            silver_price_usd: Some(31.25),
            last_updated: None,
            currency: Some("USD".to_owned()),
        }
    }

    #[tokio::test]
    async fn six_products_feature_first_four() {
        let mount = Mount::new();
        let api = StubApi::new();
        let six: Vec<_> = (1..=6).map(|i| bar(&i.to_string())).collect();
        api.set_products(six.clone()).await;

        let catalog = load(&api, &mount.scope(), ProductSource::Remote).await;
        assert_eq!(catalog.products, six);
        let featured: Vec<_> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, ["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn featured_with_fewer_than_four() {
        let catalog = Catalog {
            products: vec![bar("a"), bar("b")],
            spot_price: None,
        };
        assert_eq!(catalog.featured().len(), 2);
        assert!(Catalog::default().featured().is_empty());
    }

    #[tokio::test]
    async fn failures_degrade_to_empty() {
        let mount = Mount::new();
        let api = StubApi::new();
        api.fail_products(StubFailure::Unreachable).await;
        api.fail_spot_price(StubFailure::Status(500)).await;

        let catalog = load(&api, &mount.scope(), ProductSource::Remote).await;
        assert_eq!(catalog, Catalog::default());
    }

    #[tokio::test]
    async fn spot_failure_does_not_affect_products() {
        let mount = Mount::new();
        let api = StubApi::new();
        api.set_products(vec![bar("x")]).await;
        api.fail_spot_price(StubFailure::Unreachable).await;

        let catalog = load(&api, &mount.scope(), ProductSource::Remote).await;
        assert_eq!(catalog.products.len(), 1);
        assert!(catalog.spot_price.is_none());
    }

    #[tokio::test]
    async fn static_source_skips_network() {
        let mount = Mount::new();
        let api = StubApi::new();

        let catalog = load(&api, &mount.scope(), ProductSource::Static).await;
        assert_eq!(catalog.products.len(), 4);
        assert!(catalog.spot_price.is_none());
        assert_eq!(api.product_calls().await, 0);
        assert_eq!(api.spot_calls().await, 0);
    }

    #[tokio::test]
    async fn store_starts_empty_then_fills() {
        let mount = Mount::new();
        let api = StubApi::new();
        api.set_products(vec![bar("1")]).await;
        api.set_spot_price(spot()).await;
        api.pause();

        let store = CatalogStore::new();
        let task = store.spawn_load(Arc::new(api.clone()), mount.scope(), ProductSource::Remote);
        api.wait_for_requests(2).await;
        assert_eq!(store.snapshot(), Catalog::default());

        api.resume();
        task.await.unwrap();
        let catalog = store.snapshot();
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.spot_price, Some(spot()));
    }

    #[tokio::test]
    async fn store_ignores_results_after_unmount() {
        let mount = Mount::new();
        let api = StubApi::new();
        api.set_products(vec![bar("1")]).await;
        api.pause();

        let store = CatalogStore::new();
        let task = store.spawn_load(Arc::new(api.clone()), mount.scope(), ProductSource::Remote);
        api.wait_for_requests(2).await;
        drop(mount);
        api.resume();
        task.await.unwrap();

        assert_eq!(store.snapshot(), Catalog::default());
    }

    #[test]
    fn product_source_parses() {
        assert_eq!("Remote".parse(), Ok(ProductSource::Remote));
        assert_eq!(" static ".parse(), Ok(ProductSource::Static));
        assert!("mongo".parse::<ProductSource>().is_err());
    }
}
