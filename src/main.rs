use clap::Parser;
use itertools::Itertools;
use json_codec_options::tunables::{self, Tunables};

/// Simple runner: print the codec limits in effect after environment overrides.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output as JSON (optional flag)
    #[arg(long)]
    json: bool,
    /// Show the compiled-in defaults instead of reading the environment
    #[arg(long)]
    defaults: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Resolve the snapshot. A malformed variable means the surrounding
    // process would refuse to start, so this tool does the same.
    let effective = if args.defaults {
        Tunables::default()
    } else {
        match tunables::init() {
            Ok(t) => *t,
            Err(e) => {
                eprintln!("invalid configuration: {e}");
                std::process::exit(1);
            }
        }
    };

    // Output result.
    if args.json {
        println!("{}", serde_json::to_string_pretty(&effective).unwrap());
        return;
    }

    println!("encode_buffer_size    = {}", effective.encode_buffer_size);
    println!("max_encode_stack_size = {}", effective.max_encode_stack_size);
    println!("max_decode_stack_size = {}", effective.max_decode_stack_size);
    println!("max_decode_json_depth = {}", effective.max_decode_json_depth);

    if args.defaults {
        return;
    }

    let overridden = [
        tunables::ENV_ENCODE_BUFFER_SIZE,
        tunables::ENV_MAX_ENCODE_STACK_SIZE,
        tunables::ENV_MAX_DECODE_STACK_SIZE,
        tunables::ENV_MAX_DECODE_JSON_DEPTH,
    ]
    .into_iter()
    .filter(|var| std::env::var(var).is_ok_and(|v| !v.is_empty()))
    .join(", ");

    if overridden.is_empty() {
        println!("overrides: none");
    } else {
        println!("overrides: {overridden}");
    }
}
