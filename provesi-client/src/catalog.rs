//! Product catalog
//!
//! Products are the catalog entities independent of physical stock. Every
//! mutation is validated locally first and followed by a reload.

use std::sync::Arc;

use shared::models::Product;
use shared::{AppError, ErrorCode};

use crate::ClientResult;
use crate::api::InventoryApi;
use crate::notice::Notices;

pub struct ProductCatalog {
    api: Arc<dyn InventoryApi>,
    products: Vec<Product>,
    notices: Notices,
}

impl std::fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCatalog")
            .field("products", &self.products.len())
            .finish()
    }
}

impl ProductCatalog {
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            api,
            products: Vec::new(),
            notices: Notices::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, barcode: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.barcode == barcode)
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        match self.api.list_products().await {
            Ok(products) => {
                self.products = products;
                Ok(())
            }
            Err(e) => {
                self.notices.push_error("Loading products", &e);
                Err(e)
            }
        }
    }

    pub async fn create(&mut self, product: Product) -> ClientResult<()> {
        let result = self.create_inner(&product).await;
        self.settle("Creating product", result).await
    }

    async fn create_inner(&self, product: &Product) -> ClientResult<()> {
        product.validate()?;
        if self.product(&product.barcode).is_some() {
            return Err(AppError::already_exists(format!("product {}", product.barcode)).into());
        }
        self.api.create_product(product).await
    }

    /// Update a product; the barcode is the key and cannot change
    pub async fn update(&mut self, barcode: &str, product: Product) -> ClientResult<()> {
        let result = self.update_inner(barcode, &product).await;
        self.settle("Updating product", result).await
    }

    async fn update_inner(&self, barcode: &str, product: &Product) -> ClientResult<()> {
        product.validate()?;
        if product.barcode != barcode {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                format!("barcode {barcode} cannot change to {}", product.barcode),
            )
            .into());
        }
        self.api.update_product(barcode, product).await
    }

    pub async fn delete(&mut self, barcode: &str) -> ClientResult<()> {
        let result = self.api.delete_product(barcode).await;
        self.settle("Deleting product", result).await
    }

    /// Record a failure, or reload after success
    async fn settle(&mut self, context: &str, result: ClientResult<()>) -> ClientResult<()> {
        if let Err(e) = result {
            self.notices.push_error(context, &e);
            return Err(e);
        }
        tracing::info!("{context} succeeded");
        self.load().await
    }
}
