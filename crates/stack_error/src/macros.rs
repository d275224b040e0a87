/// Builds a [StackError](crate::StackError) from a formatted message
///
/// The stack is taken from the function the macro is written in.
///
/// # Example
/// ```
/// # use stack_error::stack_err;
/// let err = stack_err!("bad port {}", 70000);
/// assert!(err.to_string().starts_with("bad port 70000 in:\n"));
/// ```
#[macro_export]
macro_rules! stack_err {
    ($($t:tt)*) => {
        $crate::StackError::new(::std::format!($($t)*))
    };
}

/// Quit the function with a traced, formatted error
///
/// # Example
/// ```
/// # use stack_error::stack_bail;
/// fn open(port: u32) -> stack_error::Result<()> {
///     if port > 65535 {
///         stack_bail!("bad port {port}");
///     }
///     Ok(())
/// }
///
/// assert!(open(80).is_ok());
/// assert!(open(70000).is_err());
/// ```
#[macro_export]
macro_rules! stack_bail {
    ($($t:tt)*) => {
        return ::std::result::Result::Err(::std::convert::Into::into($crate::stack_err!($($t)*)))
    };
}

/// Similar to `assert!` but quits the function with a traced error
///
/// # Example
/// ```
/// # use stack_error::stack_ensure;
/// fn half(x: u32) -> stack_error::Result<u32> {
///     stack_ensure!(x % 2 == 0, "{x} is odd");
///     Ok(x / 2)
/// }
///
/// assert_eq!(half(4).unwrap(), 2);
/// assert!(half(3).unwrap_err().to_string().starts_with("3 is odd in:"));
/// ```
#[macro_export]
macro_rules! stack_ensure {
    ($cond:expr, $($t:tt)*) => {
        if !$cond {
            $crate::stack_bail!($($t)*)
        }
    };
}
