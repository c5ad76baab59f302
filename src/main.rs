use std::{env, io, process};

use cli_app::cli;

fn main() {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let code = cli::run(env::args_os().skip(1), &mut stdout, &mut stderr);
    drop(stdout);
    drop(stderr);
    process::exit(code);
}
