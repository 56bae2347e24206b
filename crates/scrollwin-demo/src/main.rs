#![forbid(unsafe_code)]

use clap::Parser;
use scrollwin_core::logging::TARGET;
use scrollwin_demo::logging::init_tracing;
use scrollwin_demo::{Cli, run};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    if let Err(error) = run(cli, &mut stdout.lock()) {
        scrollwin_core::debug!(target: TARGET, %error, "scrollwin-demo failed");
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
