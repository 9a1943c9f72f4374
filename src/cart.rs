// ABOUTME: Session-gated cart handlers: list with totals, add-or-increment, remove, checkout
// ABOUTME: Every operation is scoped to the user resolved from the session cookie

use axum::{
    extract::{Path, State},
    response::Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::AppState;
use crate::error::{AppError, Result};
use crate::session;
use crate::types::{AddToCartRequest, CartItemView, CartResponse, MessageResponse};

pub async fn get_cart(State(state): State<AppState>, jar: CookieJar) -> Result<Json<CartResponse>> {
    let session_data = session::extract_session_from_jar(&jar, &state.sessions)?;

    let rows = state.storage.cart_items(session_data.user_id).await?;

    let mut items = Vec::with_capacity(rows.len());
    let mut total = 0.0;
    for (item, perfume) in rows {
        // The foreign key guarantees the perfume exists; a miss here is a bug.
        let perfume = perfume.ok_or_else(|| {
            AppError::Internal(format!("Cart item {} references a missing perfume", item.id))
        })?;

        let line_total = perfume.price * f64::from(item.quantity);
        total += line_total;
        items.push(CartItemView {
            id: item.id,
            quantity: item.quantity,
            line_total,
            perfume,
        });
    }

    Ok(Json(CartResponse { items, total }))
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<MessageResponse>> {
    let session_data = session::extract_session_from_jar(&jar, &state.sessions)?;

    let quantity = req.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    state
        .storage
        .find_perfume(req.perfume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Perfume {}", req.perfume_id)))?;

    state
        .storage
        .add_to_cart(session_data.user_id, req.perfume_id, quantity)
        .await?;

    Ok(Json(MessageResponse {
        message: "Added to cart".to_string(),
    }))
}

pub async fn remove_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(item_id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    let session_data = session::extract_session_from_jar(&jar, &state.sessions)?;

    let deleted = state
        .storage
        .remove_cart_item(session_data.user_id, item_id)
        .await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Cart item {}", item_id)));
    }

    Ok(Json(MessageResponse {
        message: "Removed from cart".to_string(),
    }))
}

pub async fn checkout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MessageResponse>> {
    let session_data = session::extract_session_from_jar(&jar, &state.sessions)?;

    let cleared = state.storage.clear_cart(session_data.user_id).await?;
    tracing::info!(
        "User {} checked out {} cart rows",
        session_data.user_id,
        cleared
    );

    Ok(Json(MessageResponse {
        message: "Order placed successfully".to_string(),
    }))
}
