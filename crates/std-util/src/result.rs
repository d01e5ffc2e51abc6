/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// With a second argument, also asserts the error satisfies the named
/// predicate method, e.g. `assert_err!(reader.read(&mut r), is_end_of_stream)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr, $is:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$is(),
            "expected error satisfying `{}`; actual={}",
            stringify!($is),
            err
        );
        err
    }};
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's display chain otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={e}"),
        }
    };
}
