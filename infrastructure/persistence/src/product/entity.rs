use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use business::domain::product::model::{Product, ProductCollection};
use business::domain::shared::value_objects::{ProductId, thumbnails_from_json};

use crate::file_store::Document;
use crate::lenient;

#[derive(Debug, Clone, Serialize)]
pub struct ProductEntity {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: i64,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl ProductEntity {
    /// Reads a stored record, coercing loosely typed fields. `None` when the
    /// record is not an object or has no usable id.
    pub fn from_json(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let id = ProductId::from_json(record.get("id")?).ok()?;

        Some(Self {
            id: id.value(),
            title: lenient::text(record, "title"),
            description: lenient::text(record, "description"),
            code: lenient::text(record, "code"),
            price: lenient::number(record, "price"),
            status: lenient::flag(record, "status", true),
            stock: lenient::integer(record, "stock"),
            category: lenient::text(record, "category"),
            thumbnails: thumbnails_from_json(record.get("thumbnails").cloned()),
        })
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title.clone(),
            description: product.description.clone(),
            code: product.code.clone(),
            price: product.price,
            status: product.status,
            stock: product.stock,
            category: product.category.clone(),
            thumbnails: product.thumbnails.clone(),
        }
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.title,
            self.description,
            self.code,
            self.price,
            self.status,
            self.stock,
            self.category,
            self.thumbnails,
        )
    }
}

/// On-disk shape of `products.json`.
#[derive(Debug, Default, Serialize)]
pub struct ProductDocument {
    pub products: Vec<ProductEntity>,
    #[serde(rename = "lastId")]
    pub last_id: u64,
}

impl Document for ProductDocument {
    fn from_json(value: Value) -> Self {
        let products: Vec<ProductEntity> = lenient::records(&value, "products")
            .iter()
            .filter_map(|record| {
                let entity = ProductEntity::from_json(record);
                if entity.is_none() {
                    warn!(record = %record, "Skipping unreadable product record");
                }
                entity
            })
            .collect();
        // Never hand out an id that a stored record already uses.
        let highest = products.iter().map(|p| p.id).max().unwrap_or(0);

        Self {
            last_id: lenient::last_id(&value).max(highest),
            products,
        }
    }
}

impl ProductDocument {
    pub fn from_domain(products: &ProductCollection) -> Self {
        Self {
            products: products
                .items()
                .iter()
                .map(ProductEntity::from_domain)
                .collect(),
            last_id: products.last_id(),
        }
    }

    pub fn into_domain(self) -> ProductCollection {
        ProductCollection::from_repository(
            self.products
                .into_iter()
                .map(|e| e.into_domain())
                .collect(),
            self.last_id,
        )
    }
}
