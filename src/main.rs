//! Runs the full suite at the default size and prints the report.

use log::error;
use matbench::config::HarnessConfig;
use matbench::diagnostics::NdarrayDiagnostics;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = HarnessConfig::default();
    let stdout = std::io::stdout();

    if let Err(e) = matbench::run(&config, stdout.lock(), Some(&NdarrayDiagnostics)) {
        error!("benchmark run failed: {:?}", e);
        // printed unconditionally, the logger may be switched off
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
