use clap::Parser;

fn main() {
    let cli = switch_env::cli::Cli::parse();
    switch_env::logging::init(cli.verbose);

    if let Err(err) = switch_env::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
