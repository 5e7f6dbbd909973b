use std::error::Error;
use std::fmt::Debug;

pub mod env_args;
pub mod test;

/// Log the error and return the given value.
/// Meant to be used in `map_err` calls.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Log a message along with the error and return the given value.
/// Meant to be used in `map_err` calls.
pub fn log_message_and_return<E: Debug, T>(message: &str, value_to_return: T) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

/// Render an error and all of its sources on a single line each.
pub fn error_chain(error: &dyn Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }

    chain
}
