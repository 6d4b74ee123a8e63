//! Order file upload handler

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use card_common::AppError;
use card_service::{OrderResponse, OrderService};
use tracing::debug;
use uuid::Uuid;

use crate::extractors::{AuthUser, PathParam};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;
use crate::storage::UploadKind;

/// Upload the logo and/or design file of an order
///
/// POST /orders/{order_id}/files (multipart fields `logo`, `design`)
pub async fn upload_order_files(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(order_id): PathParam<Uuid>,
    mut multipart: Multipart,
) -> ApiResult<Json<OrderResponse>> {
    let service = OrderService::new(state.service_context());

    // Nothing is written for orders the caller does not own
    service.require_order_owner(&auth.user, order_id).await?;

    let mut has_logo = false;
    let mut has_design = false;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(kind) = field.name().and_then(UploadKind::from_field) else {
            debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        };
        let file_name = field.file_name().map(ToString::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;
        if data.is_empty() {
            continue;
        }

        state
            .storage()
            .save_order_file(order_id, kind, file_name.as_deref(), &data)
            .await?;

        match kind {
            UploadKind::Logo => has_logo = true,
            UploadKind::Design => has_design = true,
        }
    }

    if !has_logo && !has_design {
        return Err(ApiError::invalid_body(
            "expected a non-empty `logo` or `design` file",
        ));
    }

    let response = service
        .record_uploaded_files(&auth.user, order_id, has_logo, has_design)
        .await?;
    Ok(Json(response))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::App(AppError::PayloadTooLarge(e.body_text()))
    } else {
        ApiError::invalid_body(e.body_text())
    }
}
