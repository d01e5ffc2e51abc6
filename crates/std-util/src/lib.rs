pub mod result;
pub mod test_support;

pub mod prelude {
    pub use crate::{assert_err, assert_ok, test_support::init_tracing};
}
