fn main() {
    sexpr::cli::run();
}
