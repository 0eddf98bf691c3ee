pub mod cli;
pub mod error;
pub mod escape;
pub mod render;
pub mod schema;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
