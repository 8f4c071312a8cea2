/// A named grouping of elements, rendered as a layout column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    description: Option<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description unless one is already recorded.
    pub(crate) fn backfill_description(&mut self, description: &str) {
        let description = description.trim();
        if self.description.is_none() && !description.is_empty() {
            self.description = Some(description.to_string());
        }
    }
}
