use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A company products are sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    /// Store-assigned identifier
    pub id: i32,
    /// Unique across all suppliers
    pub supplier_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Body of `POST /add`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateSupplier {
    #[validate(length(min = 1, max = 255))]
    pub supplier_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of `PUT /update/{id}`. Replaces every field; omitted optional
/// fields are cleared.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateSupplier {
    #[validate(length(min = 1, max = 255))]
    pub supplier_name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Supplier {
    pub(crate) fn new(id: i32, input: CreateSupplier) -> Self {
        Self {
            id,
            supplier_name: input.supplier_name,
            contact_person: input.contact_person,
            email: input.email,
            phone: input.phone,
            address: input.address,
        }
    }

    pub(crate) fn replace(&mut self, input: UpdateSupplier) {
        self.supplier_name = input.supplier_name;
        self.contact_person = input.contact_person;
        self.email = input.email;
        self.phone = input.phone;
        self.address = input.address;
    }
}
