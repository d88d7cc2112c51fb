//! Standalone CLI tool that loads a DLL through the default loader and
//! reports which exports resolved.

use clap::Parser;

use windl_core::api;
use windl_core::loader::{self, LoadSettings};

#[derive(Parser)]
#[command(name = "windl-resolve", about = "Resolve a DLL's declared exports and print their addresses")]
struct Args {
    /// Library name (user32, kernel32, ntdll, comctl32)
    dll: String,

    /// Function name(s) to resolve. If omitted, resolves the whole table.
    #[arg(long = "fn")]
    functions: Vec<String>,

    /// Route through the process-wide singleton cache
    #[arg(long)]
    singleton: bool,
}

fn main() {
    let args = Args::parse();

    let Some(table) = api::table_for(&args.dll) else {
        eprintln!("no signature table for {}", args.dll);
        std::process::exit(1);
    };

    let fns: Vec<&str> = args.functions.iter().map(String::as_str).collect();
    let settings = LoadSettings {
        singleton: args.singleton,
    };

    match loader::load(table.dll(), table, &fns, settings) {
        Ok(binding) => {
            for name in binding.names() {
                let addr = binding.fn_addr(name).unwrap_or(std::ptr::null());
                println!("{name}\t{addr:p}");
            }
            eprintln!("{} of {} exports resolved", binding.len(), table.len());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
