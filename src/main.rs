//! punchclock main entrypoint.

use punchclock::run;

fn main() {
    if let Err(e) = run() {
        punchclock::ui::messages::error(e);
        std::process::exit(1);
    }
}
