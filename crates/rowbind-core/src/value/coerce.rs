use super::{parse, Slot};
use crate::{Error, Result};

/// Coerces one cell into the field behind `slot`.
///
/// Pointer slots are left untouched for empty cells; every other slot is
/// overwritten. On error the field may already have been allocated (pointer
/// slots) but is otherwise unchanged.
pub fn coerce(slot: Slot<'_>, cell: &str) -> Result<()> {
    match slot {
        Slot::Text(field) => {
            field.clear();
            field.push_str(cell);
        }
        Slot::Bool(field) => *field = parse::boolean(cell)?,
        Slot::Signed(field) => {
            let to_type = field.type_name();
            let value = parse::signed(cell, to_type)?;
            if !field.assign(value) {
                return Err(Error::invalid_integer(cell, to_type));
            }
        }
        Slot::Unsigned(field) => {
            let to_type = field.type_name();
            let value = parse::unsigned(cell, to_type)?;
            if !field.assign(value) {
                return Err(Error::invalid_integer(cell, to_type));
            }
        }
        Slot::Float(field) => {
            let value = parse::float(cell, field.type_name())?;
            field.assign(value);
        }
        Slot::Nested(nested) => nested.decode(cell)?,
        Slot::Pointer(field) => {
            if cell.is_empty() {
                return Ok(());
            }
            coerce(field.alloc().slot(), cell)?;
        }
        Slot::Unsupported(type_name) => return Err(Error::unsupported_field_type(type_name)),
    }

    Ok(())
}
