//! Cashier-facing product shapes. Cost price, supplier ids and audit columns
//! never leave the server through these.

use serde::{Deserialize, Serialize};

use crate::domain::a005_product::aggregate::Product;

/// Row in the cashier product grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicProduct {
    pub id: String,
    pub price: f64,
    pub name: String,
    pub image_url: String,
    pub category_name: String,
    pub barcode: String,
}

impl From<&Product> for PublicProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            price: p.price,
            name: p.name.clone(),
            image_url: p.image_url.clone(),
            category_name: p.category_name.clone(),
            barcode: p.barcode.clone(),
        }
    }
}

/// Product detail as shown to a cashier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicProductDetail {
    #[serde(flatten)]
    pub summary: PublicProduct,
    pub size: String,
    pub unit: String,
    pub stock: f64,
    pub sold: f64,
    pub min_stock: f64,
    pub description: String,
    pub branch_name: String,
    pub supplier_name: String,
    pub expiration_date: String,
}

impl From<&Product> for PublicProductDetail {
    fn from(p: &Product) -> Self {
        Self {
            summary: PublicProduct::from(p),
            size: p.size.clone(),
            unit: p.unit.clone(),
            stock: p.stock,
            sold: p.sold,
            min_stock: p.min_stock,
            description: p.description.clone(),
            branch_name: p.branch_name.clone(),
            supplier_name: p.supplier_name.clone(),
            expiration_date: p.expiration_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_drops_private_columns() {
        let product: Product = serde_json::from_value(json!({
            "id": "P1",
            "name": "Gula 1kg",
            "price": 17000,
            "modal": 15000,
            "supplier_id": "S9",
            "stock": 4
        }))
        .unwrap();
        let summary = serde_json::to_value(PublicProduct::from(&product)).unwrap();
        let keys: Vec<&str> = summary.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        assert!(summary.get("modal").is_none());

        let detail = serde_json::to_value(PublicProductDetail::from(&product)).unwrap();
        assert!(detail.get("modal").is_none());
        assert!(detail.get("supplier_id").is_none());
        assert_eq!(detail["stock"].as_f64(), Some(4.0));
        assert_eq!(detail["name"], "Gula 1kg");
    }
}
