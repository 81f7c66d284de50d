//! Field-driven modal form used for every create/edit dialog.
//!
//! A [`ModalForm`] is built from an ordered list of [`FieldDescriptor`]s and
//! holds one string value per field. Submitting collects every field into a
//! flat [`FormValues`] map; coercing those strings into payload types is the
//! submit handler's job, not the form's.

pub mod builders;

pub use builders::*;

use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

/// Submitted form data: field name → raw string value
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Textarea,
    Select(Vec<SelectOption>),
    Date,
}

impl FieldKind {
    /// The HTML control type for this kind
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Select(_) => "select",
            FieldKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Initial value, if any
    pub value: Option<String>,
}

impl FieldDescriptor {
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        FieldDescriptor {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Starting value: the initial value, except that a select whose initial
    /// value is not one of its options starts on its first option.
    fn initial_value(&self) -> String {
        match &self.kind {
            FieldKind::Select(options) => {
                let wanted = self.value.as_deref().unwrap_or("");
                if options.iter().any(|o| o.value == wanted) {
                    wanted.to_string()
                } else {
                    options.first().map(|o| o.value.clone()).unwrap_or_default()
                }
            }
            _ => self.value.clone().unwrap_or_default(),
        }
    }
}

/// What a submitted form should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPurpose {
    CreateProject,
    EditProject(u64),
    CreateTask,
    EditTask(u64),
}

/// An open form: its fields, their current values, and which has focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalForm {
    title: String,
    purpose: FormPurpose,
    fields: Vec<FieldDescriptor>,
    values: Vec<String>,
    focus: usize,
}

impl ModalForm {
    pub fn new(title: impl Into<String>, purpose: FormPurpose, fields: Vec<FieldDescriptor>) -> Self {
        let values = fields.iter().map(FieldDescriptor::initial_value).collect();
        ModalForm {
            title: title.into(),
            purpose,
            fields,
            values,
            focus: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn purpose(&self) -> FormPurpose {
        self.purpose
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn value_at(&self, index: usize) -> &str {
        self.values.get(index).map_or("", |v| v.as_str())
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        let idx = self.fields.iter().position(|f| f.name == name)?;
        Some(self.value_at(idx))
    }

    /// Set a field by name. Select fields only accept one of their option
    /// values. Returns false when nothing was changed.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(idx) = self.fields.iter().position(|f| f.name == name) else {
            return false;
        };
        let value = value.into();
        if let FieldKind::Select(options) = &self.fields[idx].kind
            && !options.iter().any(|o| o.value == value)
        {
            return false;
        }
        self.values[idx] = value;
        true
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type a character into the focused text-like field
    pub fn insert_char(&mut self, c: char) {
        if self.focus_is_editable() {
            self.values[self.focus].push(c);
        }
    }

    /// Remove the last grapheme cluster of the focused text-like field
    pub fn backspace(&mut self) {
        if self.focus_is_editable() {
            let value = &mut self.values[self.focus];
            let last = value.grapheme_indices(true).next_back().map(|(i, _)| i);
            if let Some(idx) = last {
                value.truncate(idx);
            }
        }
    }

    /// Step the focused select by `delta` options, wrapping around
    pub fn cycle_option(&mut self, delta: isize) {
        let Some(field) = self.fields.get(self.focus) else {
            return;
        };
        let options = field.options();
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|o| o.value == self.values[self.focus])
            .unwrap_or(0) as isize;
        let len = options.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.values[self.focus] = options[next].value.clone();
    }

    fn focus_is_editable(&self) -> bool {
        self.fields
            .get(self.focus)
            .is_some_and(|f| !matches!(f.kind, FieldKind::Select(_)))
    }

    /// Collect every named field into a flat map
    pub fn collect(&self) -> FormValues {
        self.fields
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name.clone(), value.clone()))
            .collect()
    }
}

/// Where a click landed while the modal is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the form content
    Content,
    /// The backdrop around it
    Backdrop,
}

/// Owns the (at most one) open form
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    form: Option<ModalForm>,
}

impl ModalController {
    /// Show `form`, replacing anything already open
    pub fn open(&mut self, form: ModalForm) {
        self.form = Some(form);
    }

    pub fn close(&mut self) {
        self.form = None;
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&ModalForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ModalForm> {
        self.form.as_mut()
    }

    /// The submit step: collect values without closing. The caller closes
    /// the modal once its handler succeeds.
    pub fn submit(&self) -> Option<(FormPurpose, FormValues)> {
        self.form.as_ref().map(|f| (f.purpose(), f.collect()))
    }

    /// Clicking the backdrop closes the modal; clicks on content do nothing
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}
