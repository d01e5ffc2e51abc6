use super::{FieldMut, Record};
use crate::value::Slot;
use crate::{Error, Result};

/// Route from a root record to one leaf field.
///
/// Every step but the last descends into an embedded record; the last one
/// names the leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index of the field in its record's declaration order
    pub index: usize,

    /// The field is an optional embedded record that is allocated if absent
    /// before descending
    pub indirect: bool,
}

impl FieldPath {
    pub(crate) fn new(steps: Vec<Step>) -> FieldPath {
        debug_assert!(!steps.is_empty());
        FieldPath { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Field indices along the path.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.iter().map(|step| step.index)
    }

    /// Walks the path from `root`, allocating optional embedded records on
    /// the way, and returns the leaf field.
    pub fn resolve<'a>(&self, root: &'a mut dyn Record) -> Result<Slot<'a>> {
        let mut record = root;

        let Some((leaf, parents)) = self.steps.split_last() else {
            return Err(Error::invalid_field_path(record.type_name(), 0, "a field"));
        };

        for step in parents {
            let name = record.type_name();
            record = match record.field_mut(step.index) {
                Some(FieldMut::Embedded(embedded)) => embedded,
                _ => {
                    return Err(Error::invalid_field_path(
                        name,
                        step.index,
                        "an embedded record",
                    ))
                }
            };
        }

        let name = record.type_name();
        match record.field_mut(leaf.index) {
            Some(FieldMut::Value(slot)) => Ok(slot),
            _ => Err(Error::invalid_field_path(name, leaf.index, "a value")),
        }
    }
}
