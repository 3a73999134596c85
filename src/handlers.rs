use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::completion::pipeline::correct_and_translate;
use crate::db::NewTranslation;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub message: String,
    pub language: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub corrected_text: String,
    pub translated_text: String,
}

/// Correct the message, translate the correction, store the exchange, and
/// return both texts. The record keeps `language` and `model` exactly as
/// supplied; the default model is the adapter's concern.
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    let language = request.language.as_deref().unwrap_or_default();

    let exchange = correct_and_translate(
        state.completion.as_ref(),
        &request.message,
        language,
        request.model.as_deref(),
    )
    .await
    .map_err(|e| {
        let err = ApiError::Provider(e);
        error!("{}", err);
        err
    })?;

    let record = NewTranslation {
        message: request.message,
        language: request.language,
        model: request.model,
        corrected_text: exchange.corrected_text.clone(),
        translated_text: exchange.translated_text.clone(),
    };

    // The exchange already succeeded; a failed write must not take the
    // result away from the caller.
    match state.store.insert(record).await {
        Ok(id) => info!("Stored translation record id={}", id),
        Err(e) => error!("{}", ApiError::Persistence(e)),
    }

    Ok(Json(TranslateResponse {
        corrected_text: exchange.corrected_text,
        translated_text: exchange.translated_text,
    }))
}
