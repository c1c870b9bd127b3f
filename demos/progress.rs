//! Determinate progress with a raw-count label and a colored completion line.

use std::time::Duration;

use owo_colors::OwoColorize;
use pulseline::prelude::*;

fn main() -> Result<(), Error> {
    let total = 120;
    let mut bar = ProgressBar::new("Syncing shards", total)?
        .width(30)
        .counts()
        .start();
    for done in 1..=total {
        std::thread::sleep(Duration::from_millis(25));
        bar.update(done)?;
    }
    bar.close();

    eprintln!("{} all {total} shards synced", "✓".green());
    Ok(())
}
