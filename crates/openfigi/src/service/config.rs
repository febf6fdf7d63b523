/// Capacity of the channel behind every stream returned by
/// [`FigiService`](crate::FigiService).
pub const DEFAULT_STREAM_BUFFER_SIZE: usize = 100;

/// Runtime settings for a [`FigiService`](crate::FigiService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Number of results a producer may run ahead of its consumer before it
    /// suspends. Values below 1 are treated as 1.
    pub stream_buffer_size: usize,
}

impl ServiceConfig {
    /// Returns a copy with a different stream buffer size.
    #[must_use]
    pub fn with_stream_buffer_size(self, stream_buffer_size: usize) -> Self {
        Self { stream_buffer_size }
    }

    pub(crate) fn channel_capacity(&self) -> usize {
        self.stream_buffer_size.max(1)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            stream_buffer_size: DEFAULT_STREAM_BUFFER_SIZE,
        }
    }
}
