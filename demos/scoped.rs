//! Scoped acquisition: cleanup runs on every exit path, and a failure inside
//! the wrapped block propagates unchanged after the line is cleaned up.

use std::time::Duration;

use pulseline::prelude::*;

fn main() -> Result<(), Error> {
    // Erased on exit: nothing is left on the line, success or failure.
    let outcome: Result<(), &str> = Spinner::new("Trying something flaky")?
        .erase(true)
        .show(|| {
            std::thread::sleep(Duration::from_secs(2));
            Err("upstream timed out")
        });
    if let Err(reason) = outcome {
        eprintln!("flaky thing failed: {reason}");
    }

    // Guard style, for work that doesn't fit in a closure.
    let mut active = Ellipsis::new("Tidying up")?
        .interval(Duration::from_millis(300))
        .start();
    std::thread::sleep(Duration::from_secs(2));
    active.close();

    Ok(())
}
