use cineradar_api::{ApiError, MetadataService};
use cineradar_core::models::{ExternalKey, ExternalMetadata};

/// Fetch metadata and cast together. Missing credits do not fail the page.
pub async fn load_details<S: MetadataService>(
    service: &S,
    key: ExternalKey,
) -> Result<ExternalMetadata, ApiError> {
    let (details, credits) = futures::join!(service.details(key), service.credits(key));

    let mut metadata = details?;
    match credits {
        Ok(cast) => metadata.cast = cast,
        Err(e) => tracing::warn!(error = %e, id = key.id, "credits unavailable"),
    }
    Ok(metadata)
}
