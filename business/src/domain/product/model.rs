use serde_json::Value;

use super::errors::ProductError;
use crate::domain::shared::collection::{Collection, Identified};
use crate::domain::shared::value_objects::{ProductId, Scalar, thumbnails_from_json};

pub type ProductCollection = Collection<Product>;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: i64,
    pub category: String,
    pub thumbnails: Vec<String>,
}

impl Identified for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Raw product fields as supplied by a caller. `None` means the field was not
/// provided (absent or `null`).
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub title: Option<Scalar>,
    pub description: Option<Scalar>,
    pub code: Option<Scalar>,
    pub price: Option<Scalar>,
    pub stock: Option<Scalar>,
    pub category: Option<Scalar>,
    pub status: Option<Scalar>,
    pub thumbnails: Option<Value>,
}

/// Validated values for a product that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewProductProps {
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: i64,
    pub category: String,
    pub thumbnails: Vec<String>,
}

fn require(field: &'static str, value: Option<Scalar>) -> Result<Scalar, ProductError> {
    match value {
        Some(value) if !value.is_blank() => Ok(value),
        _ => Err(ProductError::FieldRequired { field }),
    }
}

fn number(field: &'static str, value: &Scalar) -> Result<f64, ProductError> {
    value
        .to_number()
        .ok_or(ProductError::InvalidNumber { field })
}

fn integer(field: &'static str, value: &Scalar) -> Result<i64, ProductError> {
    value
        .to_integer()
        .ok_or(ProductError::InvalidNumber { field })
}

impl NewProductProps {
    /// Required fields are checked in a fixed order and the first missing one
    /// is reported; numeric coercion runs only once all of them are present.
    pub fn from_fields(fields: ProductFields) -> Result<Self, ProductError> {
        let title = require("title", fields.title)?;
        let description = require("description", fields.description)?;
        let code = require("code", fields.code)?;
        let price = require("price", fields.price)?;
        let stock = require("stock", fields.stock)?;
        let category = require("category", fields.category)?;

        Ok(Self {
            title: title.to_text(),
            description: description.to_text(),
            code: code.to_text(),
            price: number("price", &price)?,
            status: fields.status.map(|s| s.truthy()).unwrap_or(true),
            stock: integer("stock", &stock)?,
            category: category.to_text(),
            thumbnails: thumbnails_from_json(fields.thumbnails),
        })
    }
}

/// Validated subset of fields to merge onto an existing product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub stock: Option<i64>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

fn provided_text(field: &'static str, value: Option<Scalar>) -> Result<Option<String>, ProductError> {
    value
        .map(|v| require(field, Some(v)).map(|v| v.to_text()))
        .transpose()
}

impl ProductPatch {
    pub fn from_fields(fields: ProductFields) -> Result<Self, ProductError> {
        Ok(Self {
            title: provided_text("title", fields.title)?,
            description: provided_text("description", fields.description)?,
            code: provided_text("code", fields.code)?,
            price: fields
                .price
                .map(|v| number("price", &v))
                .transpose()?,
            status: fields.status.map(|s| s.truthy()),
            stock: fields
                .stock
                .map(|v| integer("stock", &v))
                .transpose()?,
            category: provided_text("category", fields.category)?,
            thumbnails: fields.thumbnails.map(|t| thumbnails_from_json(Some(t))),
        })
    }

    fn apply_to(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(thumbnails) = self.thumbnails {
            product.thumbnails = thumbnails;
        }
    }
}

impl Product {
    pub fn new(id: ProductId, props: NewProductProps) -> Self {
        Self {
            id,
            title: props.title,
            description: props.description,
            code: props.code,
            price: props.price,
            status: props.status,
            stock: props.stock,
            category: props.category,
            thumbnails: props.thumbnails,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        title: String,
        description: String,
        code: String,
        price: f64,
        status: bool,
        stock: i64,
        category: String,
        thumbnails: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            code,
            price,
            status,
            stock,
            category,
            thumbnails,
        }
    }
}

impl Collection<Product> {
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.items().iter().find(|p| p.code == code)
    }

    /// Validates the fields, rejects a duplicated code and appends the product
    /// under the next id. Nothing is mutated when an error is returned.
    pub fn add_product(&mut self, fields: ProductFields) -> Result<Product, ProductError> {
        let props = NewProductProps::from_fields(fields)?;

        if let Some(existing) = self.find_by_code(&props.code) {
            return Err(ProductError::CodeDuplicated {
                code: props.code,
                existing_id: existing.id,
            });
        }

        Ok(self.push_next(|id| Product::new(id, props)).clone())
    }

    /// Merges the provided fields onto the product. The id is never part of
    /// a patch and so cannot change.
    pub fn update_product(
        &mut self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, ProductError> {
        if self.find(id).is_none() {
            return Err(ProductError::NotFound { id });
        }

        let patch = ProductPatch::from_fields(fields)?;

        if let Some(code) = &patch.code {
            let taken = self
                .items()
                .iter()
                .find(|p| &p.code == code && p.id != id);
            if let Some(other) = taken {
                return Err(ProductError::CodeDuplicated {
                    code: code.clone(),
                    existing_id: other.id,
                });
            }
        }

        let product = self.find_mut(id).ok_or(ProductError::NotFound { id })?;
        patch.apply_to(product);
        Ok(product.clone())
    }

    pub fn remove_product(&mut self, id: ProductId) -> Result<Product, ProductError> {
        self.remove(id).ok_or(ProductError::NotFound { id })
    }
}
