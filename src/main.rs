use linked_queue::menu::{Invocation, MenuConfig, QueueMenu};

use std::env;
use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let mut args = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let exe = args.next().unwrap_or_else(|| "queue-menu".to_string());

    let config = match MenuConfig::from_args(args) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print!("{}", MenuConfig::usage(&exe));
            return;
        }
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!();
            eprint!("{}", MenuConfig::usage(&exe));
            process::exit(2);
        }
    };

    init_tracing(&config.log_filter);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = <QueueMenu<i64>>::new(config);
    if let Err(err) = menu.run(stdin.lock(), stdout.lock()) {
        tracing::error!(error = %err, "queue menu aborted");
        process::exit(1);
    }
}
