use clap::{value_parser, Arg, ArgAction, Command};
use log::{debug, error};
use std::io::{self, Write};
use std::process;
use treap_height::driver::{self, Config};

fn parse_config() -> Config {
    let matches = Command::new("treap-height")
        .about("Loads whitespace separated key value pairs from stdin into a treap and reports its height.")
        .arg(
            Arg::new("baseline")
                .long("baseline")
                .action(ArgAction::SetTrue)
                .help("Load the pairs into an ordered map instead of a treap."),
        )
        .arg(
            Arg::new("sanity-check")
                .long("sanity-check")
                .action(ArgAction::SetTrue)
                .help("Verify membership of the loaded keys after loading."),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Seed for node priorities. Defaults to the system clock."),
        )
        .get_matches();

    Config {
        baseline: matches.get_flag("baseline"),
        sanity_check: matches.get_flag("sanity-check"),
        seed: matches.get_one::<u64>("seed").copied(),
    }
}

fn main() {
    if std::env::var("TREAP_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("TREAP_LOG")
            .write_style("TREAP_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let config = parse_config();
    debug!("driver config: {:?}", config);

    let stdin = io::stdin();
    match driver::run(&config, stdin.lock()) {
        Ok(report) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(err) = write!(out, "{}", report).and_then(|_| out.flush()) {
                error!("failed to write report: {:?}", err);
                process::exit(1);
            }
        },
        Err(err) => {
            error!("driver failed: {:?}", err);
            eprintln!("error: {}", err);
            process::exit(1);
        },
    }
}
