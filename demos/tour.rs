//! A walkthrough of all four indicators.
//!
//! Run with `cargo run --example tour`.

use std::time::Duration;

use pulseline::prelude::*;

fn main() -> Result<(), Error> {
    println!("Welcome to the pulseline tour!\n");

    Spinner::new("It can spin")?.show(|| pretend_work(3000));

    Bouncer::new("It can bounce")?.width(10)?.show(|| pretend_work(3000));

    Ellipsis::new("It can do the dot-dot-dot")?.show(|| pretend_work(5000));

    let mut bar = ProgressBar::new("It can load", 40)?.start();
    for done in 1..=40 {
        pretend_work(100);
        bar.update(done)?;
    }
    bar.close();

    println!("\nAnd that's all it can do!");
    Ok(())
}

fn pretend_work(millis: u64) {
    std::thread::sleep(Duration::from_millis(millis));
}
