use std::ops::Deref;

/// A decoded payload together with the bytes it was decoded from
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    data: T,
    raw: Vec<u8>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(data: T, raw: Vec<u8>) -> Self {
        Self { data, raw }
    }
    pub fn data(&self) -> &T {
        &self.data
    }
    /// The response body exactly as it was received
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
    pub fn raw_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.raw).ok()
    }
    pub fn into_inner(self) -> T {
        self.data
    }
    pub fn into_parts(self) -> (T, Vec<u8>) {
        (self.data, self.raw)
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
