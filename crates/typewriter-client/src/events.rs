//! Typed properties for the e-commerce tracking plan
//!
//! This file is generated from the tracking plan. Do not edit by hand;
//! regenerate it when the plan changes.
//!
//! One struct per event; optional fields are skipped during serialization so
//! emitted payloads contain only what the call site set.

use serde::Serialize;

/// Properties of `Cart Viewed` - a customer opened their shopping cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartViewed {
    /// Unique identifier of the cart
    pub cart_id: String,

    /// Number of distinct products in the cart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,
}

/// Properties of `Order Completed` - a customer completed checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCompleted {
    /// Unique identifier of the completed order
    pub order_id: String,

    /// Order total after discounts, in the order currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,

    /// ISO 4217 currency code of the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Properties of `Product Viewed` - a customer viewed a product detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductViewed {
    /// Unique identifier of the viewed product
    pub product_id: String,

    /// Display name of the product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// List price of the product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Properties of `User Signed Up` - a visitor created an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSignedUp {
    /// Plan the user signed up for
    pub plan: String,

    /// Where the signup came from, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}
