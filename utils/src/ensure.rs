//! Tools for interrupting function flow unless some condition holds.

/// Early exit if given condition is not satisfied.
///
/// There are two variants:
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// Example with [Option]:
/// ```
/// # use utils::ensure;
/// fn output_at(outputs: &[u64], index: usize) -> Option<u64> {
///     ensure!(index < outputs.len());
///     Some(outputs[index])
/// }
///
/// assert_eq!(output_at(&[5, 7], 1), Some(7));
/// assert_eq!(output_at(&[5, 7], 2), None);
/// ```
///
/// Example with [Result]:
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum ScriptError {
///     Empty,
///     TooLong(usize),
/// }
///
/// fn check_script(script: &[u8]) -> Result<usize, ScriptError> {
///     ensure!(!script.is_empty(), ScriptError::Empty);
///     ensure!(script.len() <= 4, ScriptError::TooLong(script.len()));
///     Ok(script.len())
/// }
///
/// assert_eq!(check_script(&[0x51]), Ok(1));
/// assert_eq!(check_script(&[]), Err(ScriptError::Empty));
/// assert_eq!(check_script(&[0; 5]), Err(ScriptError::TooLong(5)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then_some(())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then_some(()).ok_or_else(|| $err)?
    };
}
