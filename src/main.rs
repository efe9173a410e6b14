extern crate pretty_env_logger;
#[macro_use] extern crate log;

use std::process;

fn main() {
    pretty_env_logger::init();

    match tableau_prover::client::start() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(why) => {
            error!("{}", why);
            eprintln!("{}", why);
            process::exit(1);
        }
    }
}
