//! Accordion configuration.

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "faqState";

/// Heading shown above the list when none is configured.
pub const DEFAULT_TITLE: &str = "Frequently Asked Questions";

/// Settings for one accordion instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionConfig {
    /// Key under which the expansion set is persisted
    pub storage_key: String,
    /// Heading rendered above the items
    pub title: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_string(), title: DEFAULT_TITLE.to_string() }
    }
}
