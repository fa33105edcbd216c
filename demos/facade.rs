//! The console facade: timers, counters, assertions, traces.
//!
//! Run with: cargo run --example facade

use console_inspect::{value, Console};
use std::thread;
use std::time::Duration;

fn main() -> console_inspect::Result<()> {
    let mut console = Console::stdio();

    console.time("startup")?;
    thread::sleep(Duration::from_millis(25));
    console.time_log("startup", &[value!("config loaded")])?;
    thread::sleep(Duration::from_millis(25));
    console.time_end("startup")?;

    for _ in 0..3 {
        console.count("request")?;
    }
    console.count_reset("request");
    console.count("request")?;

    console.assert(1 + 1 == 2, &[value!("arithmetic broke")])?;
    console.assert(false, &[value!("expected this one to fail")])?;

    console.trace(&[value!("checkpoint"), value!({ "step": 3 })])?;
    Ok(())
}
