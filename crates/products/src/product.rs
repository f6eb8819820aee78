use serde::Serialize;
use serde_json::{Map, Value, json};

use catalog_core::{DataValidationError, Entity, ProductId, ValidationResult};

use crate::category::Category;
use crate::price::Price;

/// One catalog item.
///
/// `id` stays `None` until the first successful `create()`; everything else is
/// plain attribute state that `update()` writes back to the same row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub available: bool,
    pub category: Category,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: Price::default(),
            available: true,
            category: Category::Unknown,
        }
    }
}

impl Product {
    /// Build an unpersisted product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Plain key-value form for the API boundary.
    ///
    /// `price` is fixed-point text and `category` the member name.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id.map(ProductId::get),
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.name(),
        })
    }

    /// Populate fields from an untrusted mapping.
    ///
    /// Checks run field by field in declaration order and stop at the first
    /// failure, so a failed call can leave the product partially updated.
    /// Any `id` in the input is ignored.
    pub fn deserialize(&mut self, data: &Value) -> ValidationResult<&mut Self> {
        let map = data.as_object().ok_or_else(|| {
            DataValidationError::bad_data(format!("(expected an object, got {})", json_type(data)))
        })?;

        self.name = required_str(map, "name")?.to_owned();
        self.description = required_str(map, "description")?.to_owned();

        self.price = match required(map, "price")? {
            Value::String(s) => s.parse()?,
            Value::Number(n) => Price::try_from(n)?,
            other => {
                return Err(DataValidationError::invalid_type(
                    "price",
                    "decimal",
                    json_type(other),
                ));
            }
        };

        self.available = match required(map, "available")? {
            Value::Bool(flag) => *flag,
            other => {
                return Err(DataValidationError::invalid_type(
                    "available",
                    "bool",
                    json_type(other),
                ));
            }
        };

        self.category = required_str(map, "category")?.parse()?;

        Ok(self)
    }
}

impl TryFrom<&Value> for Product {
    type Error = DataValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let mut product = Product::default();
        product.deserialize(value)?;
        Ok(product)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

fn required<'a>(map: &'a Map<String, Value>, field: &str) -> ValidationResult<&'a Value> {
    map.get(field).ok_or_else(|| DataValidationError::missing(field))
}

fn required_str<'a>(map: &'a Map<String, Value>, field: &'static str) -> ValidationResult<&'a str> {
    let value = required(map, field)?;
    value
        .as_str()
        .ok_or_else(|| DataValidationError::invalid_type(field, "str", json_type(value)))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
