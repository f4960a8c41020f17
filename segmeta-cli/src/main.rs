/// segmeta - Segmentation transforms to oriented bounding box JSON
///
/// Usage: segmeta [OPTIONS] <FILENAME>
///
/// Writes <FILENAME>.out.json unless --output is given.
use clap::Parser;
use segmeta_cli::{init_logging, run, Args};

fn main() {
    // Usage errors exit with code 2 from clap
    let args = Args::parse();
    init_logging(args.log_level());

    if let Err(err) = run(&args) {
        tracing::error!("{}", err);
        std::process::exit(err.exit_code());
    }
}
