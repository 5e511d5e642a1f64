//! sessionlog main entrypoint.

use sessionlog::run;
use sessionlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
