fn main() -> Result<(), Box<dyn std::error::Error>> {
    confidant::cli::main()
}
