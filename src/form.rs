// SPDX-License-Identifier: MPL-2.0
//! Host-owned forms the time input binds to.
//!
//! A [`Form`] is an identified collection of named fields. The host keeps
//! its forms in a [`Forms`] registry; widgets look forms up by selector and
//! read or write field values without owning them.

/// Value held by a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

/// A named form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: FieldValue,
}

impl Field {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

/// An identified set of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    id: String,
    fields: Vec<Field>,
}

impl Form {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a text field.
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        });
        self
    }

    /// Adds a checkable field.
    #[must_use]
    pub fn with_toggle(mut self, name: impl Into<String>, checked: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: FieldValue::Toggle(checked),
        });
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `selector` names this form, either as `#id` or as a bare id.
    #[must_use]
    pub fn matches(&self, selector: &str) -> bool {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        !id.is_empty() && id == self.id
    }

    /// Text of the field `name`, if it exists and is a text field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.field(name).map(Field::value) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// State of the toggle `name`, if it exists and is a toggle.
    #[must_use]
    pub fn toggle(&self, name: &str) -> Option<bool> {
        match self.field(name).map(Field::value) {
            Some(FieldValue::Toggle(checked)) => Some(*checked),
            _ => None,
        }
    }

    /// Replaces the text of field `name`. Returns `false` when there is no
    /// such text field.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name).map(|field| &mut field.value) {
            Some(FieldValue::Text(text)) => {
                *text = value.into();
                true
            }
            _ => false,
        }
    }

    /// Sets the toggle `name`. Returns `false` when there is no such toggle.
    pub fn set_toggle(&mut self, name: &str, checked: bool) -> bool {
        match self.field_mut(name).map(|field| &mut field.value) {
            Some(FieldValue::Toggle(state)) => {
                *state = checked;
                true
            }
            _ => false,
        }
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }
}

/// Registry of the host's forms.
#[derive(Debug, Clone, Default)]
pub struct Forms {
    forms: Vec<Form>,
}

impl Forms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, form: Form) -> Self {
        self.insert(form);
        self
    }

    /// Adds a form, replacing any form with the same id.
    pub fn insert(&mut self, form: Form) {
        self.forms.retain(|existing| existing.id != form.id);
        self.forms.push(form);
    }

    /// First form matching `selector`.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.matches(selector))
    }

    /// First form matching `selector`, mutably.
    pub fn query_mut(&mut self, selector: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|form| form.matches(selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_form() -> Form {
        Form::new("time")
            .with_text("hours", "10")
            .with_text("minutes", "30")
            .with_toggle("meridian", false)
    }

    #[test]
    fn selector_matches_with_or_without_hash() {
        let form = time_form();
        assert!(form.matches("#time"));
        assert!(form.matches("time"));
        assert!(!form.matches("#other"));
        assert!(!form.matches("#"));
    }

    #[test]
    fn text_and_toggle_accessors_check_field_kind() {
        let form = time_form();
        assert_eq!(form.text("hours"), Some("10"));
        assert_eq!(form.text("meridian"), None);
        assert_eq!(form.toggle("meridian"), Some(false));
        assert_eq!(form.toggle("hours"), None);
        assert_eq!(form.text("seconds"), None);
    }

    #[test]
    fn setters_only_touch_matching_fields() {
        let mut form = time_form();
        assert!(form.set_text("minutes", "45"));
        assert!(form.set_toggle("meridian", true));
        assert!(!form.set_text("meridian", "PM"));
        assert!(!form.set_toggle("missing", true));

        assert_eq!(form.text("minutes"), Some("45"));
        assert_eq!(form.toggle("meridian"), Some(true));
    }

    #[test]
    fn registry_query_and_replace() {
        let mut forms = Forms::new().with(time_form());
        assert!(forms.query("#time").is_some());
        assert!(forms.query("#nope").is_none());

        forms.insert(Form::new("time"));
        assert!(forms.query("#time").is_some_and(Form::is_empty));
    }

    #[test]
    fn query_mut_writes_through() {
        let mut forms = Forms::new().with(time_form());
        if let Some(form) = forms.query_mut("time") {
            form.set_text("hours", "07");
        }
        assert_eq!(forms.query("#time").and_then(|f| f.text("hours")), Some("07"));
    }
}
