use konnyaku::cli::run_cli;
use konnyaku::utils::logger::Logger;

#[tokio::main]
async fn main() {
    if let Err(e) = run_cli().await {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
