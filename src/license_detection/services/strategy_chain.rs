use crate::license_detection::domain::LicenseResult;
use crate::shared::Result;
use std::future::Future;

/// Probes `items` one at a time and returns the first `Some` value
///
/// Items are probed strictly in order; no probe starts before the previous
/// one has finished. An error from any probe is returned immediately and
/// the remaining items are never probed. Falls back to `default` when
/// every probe yields `None`.
pub async fn first<T, R, F, Fut>(
    items: impl IntoIterator<Item = T>,
    mut probe: F,
    default: R,
) -> Result<R>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<Option<R>>>,
{
    for item in items {
        if let Some(value) = probe(item).await? {
            return Ok(value);
        }
    }
    Ok(default)
}

/// [`first`] specialised to license detection: an unknown result counts as
/// "nothing found" and the fallback is the unknown result.
pub async fn first_known<T, F, Fut>(
    items: impl IntoIterator<Item = T>,
    mut probe: F,
) -> Result<LicenseResult>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<LicenseResult>>,
{
    first(
        items,
        |item| {
            let pending = probe(item);
            async move {
                let result = pending.await?;
                anyhow::Ok(result.is_known().then_some(result))
            }
        },
        LicenseResult::unknown(),
    )
    .await
}
