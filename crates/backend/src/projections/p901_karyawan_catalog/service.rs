//! Product views for the cashier screens.
//!
//! The whole product sheet is fetched and filtered, sorted and paged here;
//! rows leave as the public projections only.

use std::cmp::Ordering;

use contracts::domain::a005_product::aggregate::Product;
use contracts::domain::common::ListQuery;
use contracts::projections::p901_karyawan_catalog::dto::{PublicProduct, PublicProductDetail};
use contracts::shared::response::PageInfo;

use crate::domain::a005_product;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::pagination::PageRequest;
use crate::shared::records::non_blank;
use crate::shared::state::AppState;

fn same_text(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn by_name(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Active products of the branch (all branches when none given)
fn visible<'a>(products: &'a [Product], branch_name: Option<&'a str>) -> impl Iterator<Item = &'a Product> {
    products
        .iter()
        .filter(|p| p.is_active)
        .filter(move |p| branch_name.map_or(true, |b| same_text(&p.branch_name, b)))
}

fn matches_search(product: &Product, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [&product.name, &product.barcode, &product.category_name]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn search_in(products: &[Product], query: &ListQuery) -> (Vec<PublicProduct>, PageInfo) {
    let search = non_blank(query.search.as_deref());
    let category = non_blank(query.category_name.as_deref());

    let mut found: Vec<&Product> = visible(products, non_blank(query.branch_name.as_deref()))
        .filter(|p| category.map_or(true, |c| same_text(&p.category_name, c)))
        .filter(|p| search.map_or(true, |s| matches_search(p, s)))
        .collect();
    found.sort_by(|a, b| by_name(a, b));

    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let (rows, info) = page.paginate(found);
    (rows.into_iter().map(PublicProduct::from).collect(), info)
}

/// Best sellers first, ties broken by name
pub fn rank_popular(products: &[Product], query: &ListQuery) -> (Vec<PublicProduct>, PageInfo) {
    let mut ranked: Vec<&Product> = visible(products, non_blank(query.branch_name.as_deref())).collect();
    ranked.sort_by(|a, b| {
        b.sold
            .partial_cmp(&a.sold)
            .unwrap_or(Ordering::Equal)
            .then_with(|| by_name(a, b))
    });

    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let (rows, info) = page.paginate(ranked);
    (rows.into_iter().map(PublicProduct::from).collect(), info)
}

pub async fn search(state: &AppState, query: &ListQuery) -> ApiResult<(Vec<PublicProduct>, PageInfo)> {
    let products = a005_product::service::list_all(state).await?;
    Ok(search_in(&products, query))
}

pub async fn popular(state: &AppState, query: &ListQuery) -> ApiResult<(Vec<PublicProduct>, PageInfo)> {
    let products = a005_product::service::list_all(state).await?;
    Ok(rank_popular(&products, query))
}

/// Inactive products are hidden from cashiers, so they read as missing
pub async fn detail(state: &AppState, id: &str) -> ApiResult<PublicProductDetail> {
    let (_, product) = a005_product::service::get_by_id(state, id).await?;
    if !product.is_active {
        return Err(ApiError::NotFound(format!("Product {} not found", id.trim())));
    }
    Ok(PublicProductDetail::from(&product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<Product> {
        serde_json::from_value(json!([
            {"id": 1, "name": "teh botol", "sold": 40, "category_name": "Minuman", "barcode": "8991001", "branch_name": "Pusat", "modal": 3000},
            {"id": 2, "name": "Air Mineral", "sold": 90, "category_name": "Minuman", "barcode": "8991002", "branch_name": "Pusat"},
            {"id": 3, "name": "Beras 5kg", "sold": 40, "category_name": "Sembako", "barcode": "8992001", "branch_name": "Cabang Timur"},
            {"id": 4, "name": "Kopi Sachet", "sold": 500, "category_name": "Minuman", "barcode": "8991003", "branch_name": "Pusat", "is_active": false}
        ]))
        .unwrap()
    }

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn search_is_case_insensitive_and_sorted() {
        let (rows, info) = search_in(&catalog(), &query(&[("search", "MINUM")]));
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Air Mineral", "teh botol"]);
        assert_eq!(info.total, 2);
    }

    #[test]
    fn search_matches_barcode() {
        let (rows, _) = search_in(&catalog(), &query(&[("search", "8992")]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "3");
    }

    #[test]
    fn branch_and_category_filters() {
        let (rows, _) = search_in(
            &catalog(),
            &query(&[("branch_name", "pusat"), ("category_name", "minuman")]),
        );
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|p| p.category_name == "Minuman"));
    }

    #[test]
    fn popular_ranks_by_sold_then_name() {
        let (rows, info) = rank_popular(&catalog(), &query(&[]));
        let ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
        // inactive id 4 is hidden despite selling most
        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(info.total, 3);
    }

    #[test]
    fn local_pagination() {
        let (rows, info) = rank_popular(&catalog(), &query(&[("page", "2"), ("limit", "2")]));
        assert_eq!(rows.len(), 1);
        assert_eq!(info.total_pages, 2);
        assert!(info.has_prev);
        assert!(!info.has_next);
    }

    #[test]
    fn projection_hides_cost_price() {
        let (rows, _) = search_in(&catalog(), &query(&[("search", "teh")]));
        let value = serde_json::to_value(&rows[0]).unwrap();
        assert!(value.get("modal").is_none());
        assert!(value.get("stock").is_none());
    }
}
