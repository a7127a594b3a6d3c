#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_docs)]
//! myFlix wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    myflix_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"myflix-ui runs in the browser; build it with `cargo build --target wasm32-unknown-unknown`.\n",
    )?;
    Ok(())
}
