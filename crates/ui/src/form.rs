//! # Project Form
//!
//! Form model backing the project drawer. Each control tracks its value,
//! validity, and the dirty/touched markers that decide whether a validation
//! message is rendered.
//!

use drawer_core::{DrawerError, Project};

// ============================================================================
// Field Names
// ============================================================================

/// Controls present on the project form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFieldName {
    Name,
}

impl FormFieldName {
    /// Key used by hosts to address the control
    pub fn key(&self) -> &'static str {
        match self {
            FormFieldName::Name => "name",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FormFieldName::Name => "Project name",
        }
    }

    /// Get all form fields
    pub fn all() -> &'static [FormFieldName] {
        &[FormFieldName::Name]
    }
}

impl std::fmt::Display for FormFieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ============================================================================
// Form Field
// ============================================================================

/// A single form control
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    value: String,
    required: bool,
    dirty: bool,
    touched: bool,
    error: Option<String>,
}

impl FormField {
    /// Create an empty, pristine control
    pub fn new(name: FormFieldName, required: bool) -> Self {
        let mut field = Self {
            value: String::new(),
            required,
            dirty: false,
            touched: false,
            error: None,
        };
        field.update_validity(name);
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Current validation message, whether or not it should be shown
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validation message to render; only once the user touched the control
    pub fn visible_error(&self) -> Option<&str> {
        if self.dirty || self.touched {
            self.error()
        } else {
            None
        }
    }

    fn update_validity(&mut self, name: FormFieldName) {
        self.error = if self.required && self.value.is_empty() {
            Some(format!("{} is required", name.label()))
        } else {
            None
        };
    }
}

// ============================================================================
// Project Form
// ============================================================================

/// Form state for project editing
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    name: FormField,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectForm {
    /// Create an empty form; `name` is required
    pub fn new() -> Self {
        Self {
            name: FormField::new(FormFieldName::Name, true),
        }
    }

    /// Get a control by name
    pub fn field(&self, name: FormFieldName) -> &FormField {
        match name {
            FormFieldName::Name => &self.name,
        }
    }

    fn field_mut(&mut self, name: FormFieldName) -> &mut FormField {
        match name {
            FormFieldName::Name => &mut self.name,
        }
    }

    /// Current value of the name control
    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// User edit of the name control
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name.value = value.into();
        self.name.dirty = true;
        self.name.update_validity(FormFieldName::Name);
    }

    /// Load values from a project, discarding unsaved edits
    pub fn patch(&mut self, project: &Project) {
        self.name.value = project.name.clone();
        for name in FormFieldName::all() {
            let field = self.field_mut(*name);
            field.dirty = false;
            field.touched = false;
            field.update_validity(*name);
        }
    }

    /// Clear every control back to empty and untouched
    pub fn reset(&mut self) {
        for name in FormFieldName::all() {
            let field = self.field_mut(*name);
            field.value.clear();
            field.dirty = false;
            field.touched = false;
            field.update_validity(*name);
        }
    }

    /// Mark every control dirty and touched so validation messages render
    pub fn mark_all_dirty(&mut self) {
        for name in FormFieldName::all() {
            let field = self.field_mut(*name);
            field.dirty = true;
            field.touched = true;
            field.update_validity(*name);
        }
    }

    /// Collect validation errors for every control
    pub fn validate(&self) -> Vec<(FormFieldName, String)> {
        FormFieldName::all()
            .iter()
            .filter_map(|name| {
                self.field(*name)
                    .error()
                    .map(|message| (*name, message.to_string()))
            })
            .collect()
    }

    /// Check if the form is valid
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// First validation failure as an error
    pub fn first_error(&self) -> Option<DrawerError> {
        self.validate()
            .into_iter()
            .next()
            .map(|(name, message)| DrawerError::validation(name.key(), message))
    }

    /// Errors that should currently be shown to the user
    pub fn visible_errors(&self) -> Vec<(FormFieldName, &str)> {
        FormFieldName::all()
            .iter()
            .filter_map(|name| self.field(*name).visible_error().map(|e| (*name, e)))
            .collect()
    }

    /// Whether any control has been edited
    pub fn is_dirty(&self) -> bool {
        FormFieldName::all()
            .iter()
            .any(|name| self.field(*name).is_dirty())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_pristine_and_invalid() {
        let form = ProjectForm::new();
        assert_eq!(form.name(), "");
        assert!(!form.is_valid());
        assert!(!form.is_dirty());
        // Nothing shown until the user interacts
        assert!(form.visible_errors().is_empty());
    }

    #[test]
    fn test_patch_from_project() {
        let mut form = ProjectForm::new();
        form.set_name("unsaved");
        form.patch(&Project::new(3, "Old"));

        assert_eq!(form.name(), "Old");
        assert!(form.is_valid());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_reset_clears_values_and_markers() {
        let mut form = ProjectForm::new();
        form.set_name("Alpha");
        form.mark_all_dirty();
        form.reset();

        let field = form.field(FormFieldName::Name);
        assert_eq!(field.value(), "");
        assert!(!field.is_dirty());
        assert!(!field.is_touched());
    }

    #[test]
    fn test_required_only_rejects_empty() {
        let mut form = ProjectForm::new();
        form.set_name("   ");
        assert!(form.is_valid());
        assert_eq!(form.name(), "   ");

        form.set_name("");
        assert!(!form.is_valid());
        assert_eq!(
            form.visible_errors(),
            vec![(FormFieldName::Name, "Project name is required")]
        );
    }

    #[test]
    fn test_mark_all_dirty_reveals_errors() {
        let mut form = ProjectForm::new();
        form.mark_all_dirty();

        let field = form.field(FormFieldName::Name);
        assert!(field.is_dirty());
        assert!(field.is_touched());
        assert_eq!(field.visible_error(), Some("Project name is required"));

        let err = form.first_error().unwrap();
        assert!(matches!(err, DrawerError::Validation { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FormFieldName::Name.key(), "name");
        assert_eq!(FormFieldName::all().len(), 1);
    }
}
