// ABOUTME: Type definitions for API requests and responses
// ABOUTME: Covers login, the catalog listing, and cart payloads

use serde::{Deserialize, Serialize};

use crate::entities::perfume;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub perfume_id: i32,
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemView {
    pub id: i32,
    pub quantity: i32,
    pub line_total: f64,
    pub perfume: perfume::Model,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartItemView>,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
