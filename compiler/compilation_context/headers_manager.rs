use std::collections::BTreeSet;

#[derive(Default)]
pub struct HeadersManager {
    headers: BTreeSet<String>,
}

impl HeadersManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a kernel header as required. Adding a header twice is a no-op.
    pub fn add(&mut self, header: &str) {
        if !self.headers.contains(header) {
            self.headers.insert(header.to_string());
        }
    }

    #[must_use]
    pub fn contains(&self, header: &str) -> bool {
        self.headers.contains(header)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }
}
