use std::collections::HashMap;

/// A named source of raw field values, e.g. a submitted form. Fields absent
/// from the source read as `None` and are reported by the validator.
pub trait FormSource: Send + Sync {
    fn value(&self, field: &str) -> Option<String>;
}

impl FormSource for HashMap<String, String> {
    fn value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}
