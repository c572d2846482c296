//! footprint main entrypoint.

use footprint::run;
use footprint::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
