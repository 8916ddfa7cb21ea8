use queens::generate;

fn main() {
    env_logger::init();

    let size = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("board size must be a non-negative integer"))
        .unwrap_or(8);

    match generate(size) {
        Ok(puzzle) => print!("{puzzle}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
