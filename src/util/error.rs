use std::error::Error;

/// Logs `err` and every error in its source chain as one line
pub fn inspect_err<E, F, D>(err: &E, kind: F)
where
    E: Error + 'static,
    F: Fn() -> D,
    D: std::fmt::Display,
{
    log::error!("got an error: {} because: {}", kind(), error_chain(err));
}

/// Formats `err` and its sources as `[0] --> outer [1] --> inner ..`
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&err| err.source())
        .enumerate()
        .fold(String::new(), |mut a, (i, err)| {
            a.push_str(&format!("\n[{}] --> {}", i, err));
            a
        })
}
