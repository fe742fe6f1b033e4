fn main() {
    mulegraph::cli::run();
}
