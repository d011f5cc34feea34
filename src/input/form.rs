use super::{FieldValue, ModuleInput};
use ahash::AHashMap;
use serde::Serialize;

/// How a form field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "values")]
pub enum FieldKind {
    /// A yes/no question that may also be left unanswered.
    Tristate,
    /// One of a fixed set of enumerated codes.
    Choice(&'static [&'static str]),
    /// Free text, e.g. a limitation note.
    Text,
}

/// Declares one input field of a clinical module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Semantic field name used by the decision table.
    pub id: &'static str,
    /// Identifier of the form control this field is read from.
    pub form_id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn tristate(id: &'static str, form_id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            form_id,
            label,
            kind: FieldKind::Tristate,
        }
    }

    pub const fn choice(
        id: &'static str,
        form_id: &'static str,
        label: &'static str,
        codes: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            form_id,
            label,
            kind: FieldKind::Choice(codes),
        }
    }

    pub const fn text(id: &'static str, form_id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            form_id,
            label,
            kind: FieldKind::Text,
        }
    }

    /// Converts a raw form value into a [`FieldValue`] according to this field's kind.
    pub fn read(&self, raw: Option<&str>) -> FieldValue {
        let trimmed = raw.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return FieldValue::Unset;
        }
        match self.kind {
            FieldKind::Tristate => match trimmed.to_ascii_lowercase().as_str() {
                "yes" | "true" => FieldValue::Bool(true),
                "no" | "false" => FieldValue::Bool(false),
                _ => FieldValue::Text(trimmed.to_string()),
            },
            FieldKind::Choice(_) => FieldValue::Text(trimmed.to_string()),
            // Notes keep their original spacing.
            FieldKind::Text => FieldValue::Text(raw.unwrap_or_default().to_string()),
        }
    }
}

/// Assembles a [`ModuleInput`] from raw form state using a module's field contract.
pub struct FormReader<'a> {
    fields: &'a [FieldSpec],
}

impl<'a> FormReader<'a> {
    pub fn new(fields: &'a [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Reads every declared field from `form`, keyed by form id.
    ///
    /// Fields missing from the form are recorded as unset so the input summary
    /// always lists the full contract.
    pub fn read(&self, form: &AHashMap<String, String>) -> ModuleInput {
        self.fields
            .iter()
            .map(|spec| {
                let raw = form.get(spec.form_id).map(String::as_str);
                (spec.id, spec.read(raw))
            })
            .collect()
    }
}
