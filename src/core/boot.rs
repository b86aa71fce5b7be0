use std::fmt::Debug;

/// Named page setup step. Steps are independent of each other.
pub type BootStep<'a, E> = (&'static str, Box<dyn FnOnce() -> Result<(), E> + 'a>);

pub fn step<'a, E>(
    name: &'static str,
    run: impl FnOnce() -> Result<(), E> + 'a,
) -> BootStep<'a, E> {
    (name, Box::new(run))
}

/// Run every step in order, logging failures instead of stopping at them.
/// Returns the names of the steps that failed.
pub fn run_steps<E: Debug>(steps: Vec<BootStep<'_, E>>) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for (name, step) in steps {
        if let Err(e) = step() {
            log::warn!("[page] {} setup failed: {:?}", name, e);
            failed.push(name);
        }
    }
    failed
}
