use clap::Parser;

mod commands;
mod output;

use commands::rewrite;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "recase")]
#[command(version = VERSION)]
#[command(about = "Case-preserving whole-word rename across a directory tree")]
struct Cli {
    #[command(flatten)]
    rewrite: rewrite::RewriteArgs,

    /// Print a JSON summary on stdout and send notices to stderr
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let (json_result, exit_code) = output::map_cmd_result_to_json(rewrite::run(cli.rewrite, json));

    match json_result {
        Ok(value) if json => {
            let _ = output::print_success(value);
        }
        Ok(_) => {}
        Err(err) => {
            let _ = output::print_error(&err);
        }
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
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
