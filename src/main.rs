mod cli;
mod config;
mod launch;
mod locate;

fn main() {
    cli::run();
}
