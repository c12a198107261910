use clap::Parser;

mod commands;
mod output;

use commands::scan::{self, ScanArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Text,
}

#[derive(Parser)]
#[command(name = "lessonscan")]
#[command(version = VERSION)]
#[command(about = "List the shell commands embedded in JSON lesson files")]
struct Cli {
    #[command(flatten)]
    scan: ScanArgs,
}

fn response_mode(args: &ScanArgs) -> ResponseMode {
    if args.json {
        ResponseMode::Json
    } else {
        ResponseMode::Text
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match response_mode(&cli.scan) {
        ResponseMode::Json => {
            let (json_result, exit_code) = output::map_cmd_result_to_json(scan::run(&cli.scan));
            if output::print_json_result(json_result).is_err() {
                return std::process::ExitCode::from(1);
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
        ResponseMode::Text => match scan::run_text(&cli.scan) {
            Ok((content, exit_code)) => {
                if let Err(err) = output::print_text(&content) {
                    eprintln!("{}: {}", err.code.as_str(), err.details);
                    return std::process::ExitCode::from(1);
                }
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                let (json_result, exit_code) =
                    output::map_cmd_result_to_json::<serde_json::Value>(Err(err));
                let _ = output::print_json_result(json_result);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        },
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
