use crate::Result;

/// Capability of a structured type to parse itself from a whole cell.
///
/// Types opt in explicitly; a nested field whose type does not implement it
/// fails to decode with a "does not support text decoding" error.
///
/// ```
/// use rowbind_core::{bail, value::TextDecode, Result};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl TextDecode for Point {
///     fn decode_text(text: &str) -> Result<Self> {
///         let Some((x, y)) = text.split_once(' ') else {
///             bail!("expected `x y`, got `{text}`");
///         };
///         Ok(Point {
///             x: x.parse().map_err(anyhow::Error::from)?,
///             y: y.parse().map_err(anyhow::Error::from)?,
///         })
///     }
/// }
/// ```
pub trait TextDecode: Sized {
    fn decode_text(text: &str) -> Result<Self>;
}
