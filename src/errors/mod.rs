use anyhow::Context as _;

/// Add context to import errors
pub fn import_context(source: &str) -> String {
    format!("Failed to import events from: {}", source)
}

/// Add context to store errors
pub fn store_context(operation: &str) -> String {
    format!("Failed to {} events in store", operation)
}

/// Wrap result with import context
pub fn with_import_context<T, E>(result: Result<T, E>, source: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(import_context(source))
}

/// Wrap result with store context
pub fn with_store_context<T, E>(result: Result<T, E>, operation: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(store_context(operation))
}
