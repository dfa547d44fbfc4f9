use clap::Parser;

use modulo_app_lib::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = modulo_app_lib::run(&cli) {
        eprintln!("modulo: {e}");
        std::process::exit(1);
    }
}
