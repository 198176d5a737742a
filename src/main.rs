mod cli;
mod codec;
mod expression;
mod rolls;
mod solver;
mod table;
mod target;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
