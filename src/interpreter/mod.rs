pub mod errors;
pub mod executor;
pub mod parser;

pub use errors::{ErrorKind, ScriptError};
pub use executor::{run_until_done, Program, Variables, VM};
pub use parser::load;

/// Load and run a program
///
/// Returns the final variables in first-assignment order, or the first error
/// the run raised. Each call starts from an empty variable store.
///
/// # Example
/// ```
/// use rpnloop::interpreter::run;
///
/// let vars = run("n = 3\nwhile n 0 >=\nn = n 1 -\nend").unwrap();
/// assert_eq!(vars.get("n").map(ToString::to_string).as_deref(), Some("-1"));
/// ```
pub fn run(source: &str) -> Result<Variables, ScriptError> {
    let mut vm = VM::new(load(source));
    run_until_done(&mut vm);
    vm.into_result()
}
