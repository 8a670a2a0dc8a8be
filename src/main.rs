//! WASM entry point
//!
//! Starts both backdrops and the page effects, then leaves them running.

use canvas_backdrop::{app, logging};
use tracing::Level;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    logging::init(Level::INFO);

    app::start().keep_alive();
}
