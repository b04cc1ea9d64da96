use std::env;

use livepass::{cli, exits, logging};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    logging::init();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
