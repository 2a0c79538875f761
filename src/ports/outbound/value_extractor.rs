use crate::shared::Result;

/// ValueExtractor port for evaluating a query path against structured content
pub trait ValueExtractor: Send + Sync {
    /// Extracts a single scalar or rendered sub-tree from `content`
    ///
    /// # Errors
    /// Returns `QueryEvaluationError` for malformed content or query, or when
    /// the result is empty.
    fn extract_value(&self, content: &[u8], query: &str) -> Result<String>;
}
