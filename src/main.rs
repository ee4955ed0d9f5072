use studytrack::commands::Cli;
use studytrack::libs::logging::init_logging;
use studytrack::msg_error;

fn main() {
    init_logging();

    if let Err(e) = Cli::menu() {
        msg_error!(e);
        std::process::exit(1);
    }
}
