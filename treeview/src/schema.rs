//! Tree-wide field schema.

use std::sync::Arc;

use crate::error::{Result, TreeError};
use crate::text::TextValue;

/// Field display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldFlags {
    /// The primary (title) field of an entry, or the folder field.
    pub default: bool,
    /// Paint the field's name as a label beside its value.
    pub show_name: bool,
}

impl FieldFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_field() -> Self {
        Self {
            default: true,
            ..Default::default()
        }
    }

    pub fn show_name() -> Self {
        Self {
            show_name: true,
            ..Default::default()
        }
    }
}

/// A schema field. The name doubles as the field's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDesc {
    pub name: Arc<str>,
    pub flags: FieldFlags,
}

impl FieldDesc {
    pub fn new(name: impl Into<Arc<str>>, flags: FieldFlags) -> Self {
        Self {
            name: name.into(),
            flags,
        }
    }
}

/// A field value supplied when creating or updating a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldData {
    pub field: Arc<str>,
    pub value: String,
}

impl FieldData {
    pub fn new(field: &Arc<str>, value: impl Into<String>) -> Self {
        Self {
            field: Arc::clone(field),
            value: value.into(),
        }
    }
}

/// Ordered field list shared by every node of a tree.
///
/// The first field is an entry's primary field, the fields after it up to
/// the last are an entry's secondary fields, and the last field is the
/// folder field.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldDesc>,
    /// Measured label widths, parallel to `fields`.
    labels: Vec<TextValue>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDesc>) -> Result<Self> {
        if fields.len() < 2 {
            return Err(TreeError::bad_parameter(format!(
                "schema needs at least 2 fields, got {}",
                fields.len()
            )));
        }
        if !fields[0].flags.default {
            return Err(TreeError::bad_parameter(
                "first schema field must be a default field",
            ));
        }
        if !fields[fields.len() - 1].flags.default {
            return Err(TreeError::bad_parameter(
                "last schema field must be a default field",
            ));
        }

        let mut labels = Vec::new();
        labels.try_reserve_exact(fields.len())?;
        labels.extend(fields.iter().map(|f| TextValue::new(&*f.name)));

        Ok(Self { fields, labels })
    }

    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    /// Number of fields an entry carries, primary included.
    pub fn entry_field_count(&self) -> usize {
        self.fields.len() - 1
    }

    /// Fields shown on an expanded entry's extra rows.
    pub fn secondary_fields(&self) -> &[FieldDesc] {
        &self.fields[1..self.fields.len() - 1]
    }

    pub fn folder_field(&self) -> &FieldDesc {
        &self.fields[self.fields.len() - 1]
    }

    pub(crate) fn labels_mut(&mut self) -> &mut [TextValue] {
        &mut self.labels
    }

    /// Label of the `i`th secondary field.
    pub(crate) fn secondary_label(&self, i: usize) -> &TextValue {
        &self.labels[i + 1]
    }

    /// Check that `data` names exactly the entry fields, in order.
    pub(crate) fn check_entry(&self, data: &[FieldData]) -> Result<()> {
        let expected = &self.fields[..self.entry_field_count()];
        for (index, (desc, supplied)) in expected.iter().zip(data).enumerate() {
            check_field(index, desc, supplied)?;
        }

        // The shorter side ran out first; report the first unpaired position.
        let index = expected.len().min(data.len());
        if data.len() != expected.len() {
            return Err(TreeError::SchemaMismatch {
                index,
                expected: expected.get(index).map(|f| f.name.to_string()).unwrap_or_default(),
                found: data.get(index).map(|f| f.field.to_string()).unwrap_or_default(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_folder(&self, data: &FieldData) -> Result<()> {
        check_field(self.fields.len() - 1, self.folder_field(), data)
    }
}

fn check_field(index: usize, desc: &FieldDesc, supplied: &FieldData) -> Result<()> {
    if Arc::ptr_eq(&desc.name, &supplied.field) || desc.name == supplied.field {
        Ok(())
    } else {
        Err(TreeError::SchemaMismatch {
            index,
            expected: desc.name.to_string(),
            found: supplied.field.to_string(),
        })
    }
}
