use tracing::debug;

use super::interface::{CompletionInterface, DEFAULT_MODEL};

/// One completed correct-then-translate exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub corrected_text: String,
    pub translated_text: String,
}

/// Correct the message, then translate the corrected text (not the original)
/// into the target language. Both calls use the same model; the first failure
/// propagates and the second call is never made.
pub async fn correct_and_translate(
    backend: &dyn CompletionInterface,
    message: &str,
    language: &str,
    model: Option<&str>,
) -> anyhow::Result<Exchange> {
    let model = model.unwrap_or(DEFAULT_MODEL);

    let corrected = backend
        .complete(&format!("Correct this text: {}", message), model)
        .await?;
    let corrected_text = corrected.trim().to_string();

    debug!(
        "Corrected text ({} chars), translating into {}",
        corrected_text.len(),
        language
    );

    let translated = backend
        .complete(
            &format!("Translate this into {}: {}", language, corrected_text),
            model,
        )
        .await?;
    let translated_text = translated.trim().to_string();

    Ok(Exchange {
        corrected_text,
        translated_text,
    })
}
