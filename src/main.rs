use clap::Parser;

use glyphcast::cli::{handle_config_action, run_convert, write_output, Args, Command};

fn main() {
    env_logger::init();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Config { ref action }) => handle_config_action(action.clone(), &args),
        None => run_convert(&args).and_then(|out| write_output(&out, args.output.as_deref())),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
