use goldcrest::cli;

fn main() {
    cli::run();
}
