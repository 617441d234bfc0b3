use leetcode_fetcher::config::Config;
use leetcode_fetcher::{logging, output, FetchResult, Fetcher};
use std::io;
use std::process::ExitCode;

fn print_result(result: &FetchResult) {
    if let Err(e) = output::write_line(io::stdout().lock(), result) {
        log::error!("Error: failed to write result: {}", e);
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if args.len() != 1 {
        print_result(&FetchResult::not_found());
        return ExitCode::from(1);
    }

    let (cfg, config_error) = Config::load();

    if let Err(e) = logging::init(&cfg.log_level) {
        eprintln!("Error: {}", e);
    }
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }

    let fetcher = Fetcher::from_config(&cfg.fetcher);
    let result = fetcher.fetch(&args[0]);
    print_result(&result);

    ExitCode::SUCCESS
}
