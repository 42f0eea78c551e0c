use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A sellable item bought from one supplier.
///
/// Prices are `NUMERIC(10,2)`, tax rates `NUMERIC(5,2)` percentages. Decimals
/// serialize as JSON strings (`"12.50"`) and accept strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i32,
    /// Unique across all products
    pub name: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    /// Central GST %
    pub cgst: Decimal,
    /// State GST %
    pub sgst: Decimal,
    /// Integrated GST %
    pub igst: Decimal,
    pub supplier_id: i32,
}

/// Body of `POST /add`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    #[serde(default)]
    pub cgst: Decimal,
    #[serde(default)]
    pub sgst: Decimal,
    #[serde(default)]
    pub igst: Decimal,
    pub supplier_id: i32,
}

/// Body of `PUT /update/{id}`; replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub cost_price: Decimal,
    pub selling_price: Decimal,
    #[serde(default)]
    pub cgst: Decimal,
    #[serde(default)]
    pub sgst: Decimal,
    #[serde(default)]
    pub igst: Decimal,
    pub supplier_id: i32,
}

/// Query of `GET /search`. Every filter is optional; present ones are ANDed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductSearch {
    /// Case-insensitive substring of the product name
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub keyword: Option<String>,
    /// Inclusive lower bound on selling price
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_price: Option<Decimal>,
    /// Inclusive upper bound on selling price
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<Decimal>,
}

/// `?minPrice=` means "no bound", not a parse error.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map(Some).map_err(de::Error::custom),
    }
}

impl Product {
    pub(crate) fn new(id: i32, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            cost_price: input.cost_price,
            selling_price: input.selling_price,
            cgst: input.cgst,
            sgst: input.sgst,
            igst: input.igst,
            supplier_id: input.supplier_id,
        }
    }

    pub(crate) fn replace(&mut self, input: UpdateProduct) {
        self.name = input.name;
        self.cost_price = input.cost_price;
        self.selling_price = input.selling_price;
        self.cgst = input.cgst;
        self.sgst = input.sgst;
        self.igst = input.igst;
        self.supplier_id = input.supplier_id;
    }
}

impl ProductSearch {
    /// In-memory form of the search predicate.
    ///
    /// Case folding uses Rust's Unicode `to_lowercase`. The Postgres
    /// repository uses `ILIKE`, which folds by the database's collation, so
    /// the two can disagree on some non-ASCII names (for example `İ`).
    pub fn matches(&self, product: &Product) -> bool {
        let keyword_ok = self.keyword.as_ref().is_none_or(|keyword| {
            product
                .name
                .to_lowercase()
                .contains(&keyword.to_lowercase())
        });
        let min_ok = self.min_price.is_none_or(|min| product.selling_price >= min);
        let max_ok = self.max_price.is_none_or(|max| product.selling_price <= max);

        keyword_ok && min_ok && max_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: Decimal) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            cost_price: price,
            selling_price: price,
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: Decimal::ZERO,
            supplier_id: 1,
        }
    }

    #[test]
    fn test_keyword_matches_case_insensitive_substring() {
        let search = ProductSearch {
            keyword: Some("WIDGET".to_string()),
            ..Default::default()
        };

        assert!(search.matches(&product("Blue Widget", Decimal::TEN)));
        assert!(!search.matches(&product("Bolt", Decimal::TEN)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let search = ProductSearch {
            keyword: None,
            min_price: Some(Decimal::new(100, 0)),
            max_price: Some(Decimal::new(200, 0)),
        };

        assert!(search.matches(&product("a", Decimal::new(100, 0))));
        assert!(search.matches(&product("b", Decimal::new(200, 0))));
        assert!(!search.matches(&product("c", Decimal::new(9999, 2))));
        assert!(!search.matches(&product("d", Decimal::new(20001, 2))));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(ProductSearch::default().matches(&product("anything", Decimal::ZERO)));
    }

    #[test]
    fn test_create_product_accepts_numbers_or_strings_and_defaults_taxes() {
        let input: CreateProduct = serde_json::from_str(
            r#"{"name": "Bolt", "cost_price": 1.25, "selling_price": "2.50", "supplier_id": 3}"#,
        )
        .unwrap();

        assert_eq!(input.cost_price, Decimal::new(125, 2));
        assert_eq!(input.selling_price, Decimal::new(250, 2));
        assert_eq!(input.cgst, Decimal::ZERO);
    }

    #[test]
    fn test_product_prices_serialize_as_strings() {
        let json = serde_json::to_value(product("Bolt", Decimal::new(250, 2))).unwrap();
        assert_eq!(json["selling_price"], "2.50");
    }
}
