// Usage: client-config [path/to/config.json]
fn main() {
    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    client_config::run(path);
}
