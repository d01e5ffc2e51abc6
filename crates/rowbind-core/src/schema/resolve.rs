use super::{FieldKind, FieldPath, RecordType, Step};

use indexmap::IndexMap;

/// Mapping from lowercase column tag to the field it populates.
///
/// Tags keep the order in which fields were declared. When two fields
/// resolve to the same tag the later declaration wins, at the position of the
/// first.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: IndexMap<String, FieldPath>,
}

impl Schema {
    /// Builds the schema of `ty`, flattening embedded records.
    pub fn resolve(ty: &'static RecordType) -> Schema {
        let mut schema = Schema::default();
        let mut visiting = vec![ty];
        schema.flatten(ty, &mut Vec::new(), &mut visiting);
        schema
    }

    fn flatten(
        &mut self,
        ty: &'static RecordType,
        prefix: &mut Vec<Step>,
        visiting: &mut Vec<&'static RecordType>,
    ) {
        for (index, field) in ty.fields.iter().enumerate() {
            match &field.kind {
                FieldKind::Embedded(embedded) => {
                    let inner = (embedded.record_type)();

                    // A record embedding itself through an `Option` would
                    // never bottom out
                    if visiting.iter().any(|seen| std::ptr::eq(*seen, inner)) {
                        continue;
                    }

                    prefix.push(Step {
                        index,
                        indirect: embedded.indirect,
                    });
                    visiting.push(inner);
                    self.flatten(inner, prefix, visiting);
                    visiting.pop();
                    prefix.pop();
                }
                FieldKind::Skip => {}
                FieldKind::Column { .. } => {
                    let Some(tag) = field.tag() else { continue };
                    let mut steps = prefix.clone();
                    steps.push(Step {
                        index,
                        indirect: false,
                    });
                    self.columns.insert(tag, FieldPath::new(steps));
                }
            }
        }
    }

    /// Returns the path of the field mapped to `column`. Columns are matched
    /// exactly; header names are lowercased before lookup.
    pub fn get(&self, column: &str) -> Option<&FieldPath> {
        self.columns.get(column)
    }

    /// Mapped columns and their paths, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &FieldPath)> {
        self.columns.iter().map(|(tag, path)| (tag.as_str(), path))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
