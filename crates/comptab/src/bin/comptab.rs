fn main() {
    if let Err(err) = comptab::run() {
        eprintln!("{}", comptab::format_error(&err));
        std::process::exit(1);
    }
}
