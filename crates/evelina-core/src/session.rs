use evelina_models::embed::{EmbedButton, EmbedField, EmbedValue};
use evelina_script::{encode, import, ScriptError};

/// One editing lifetime of an embed in the builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuilderSession {
    value: EmbedValue,
}

impl BuilderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: EmbedValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &EmbedValue {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut EmbedValue {
        &mut self.value
    }

    pub fn into_value(self) -> EmbedValue {
        self.value
    }

    /// Append an empty, non-inline field and return its index.
    pub fn add_field(&mut self) -> usize {
        self.value.fields.push(EmbedField::default());
        self.value.fields.len() - 1
    }

    /// Out-of-range indices are ignored.
    pub fn remove_field(&mut self, index: usize) -> Option<EmbedField> {
        (index < self.value.fields.len()).then(|| self.value.fields.remove(index))
    }

    /// Append an unlabeled primary button and return its index.
    pub fn add_button(&mut self) -> usize {
        self.value.buttons.push(EmbedButton::default());
        self.value.buttons.len() - 1
    }

    pub fn remove_button(&mut self, index: usize) -> Option<EmbedButton> {
        (index < self.value.buttons.len()).then(|| self.value.buttons.remove(index))
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.value.color = color.into();
    }

    /// Replace the current embed with an imported script. On failure the
    /// session is left untouched.
    pub fn import(&mut self, code: &[u8]) -> Result<(), ScriptError> {
        let value = import(code).inspect_err(|e| tracing::warn!("embed import failed: {}", e))?;
        self.value = value;
        Ok(())
    }

    pub fn export(&self) -> String {
        encode(&self.value)
    }

    pub fn reset(&mut self) {
        self.value = EmbedValue::default();
    }
}
