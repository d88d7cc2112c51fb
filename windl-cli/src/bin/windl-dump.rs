//! Standalone CLI tool for dumping signature tables and struct layouts as
//! JSON.

use clap::Parser;
use serde::Serialize;

use windl_core::api;
use windl_core::winstruct;

#[derive(Parser)]
#[command(name = "windl-dump", about = "Dump windl signature tables and struct layouts as JSON")]
struct Args {
    /// DLL table(s) to dump. If omitted, dumps every table.
    #[arg(long)]
    dll: Vec<String>,

    /// Dump struct layouts (computed size, alignment, field offsets)
    /// instead of signature tables.
    #[arg(long)]
    structs: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

#[derive(Serialize)]
struct FieldDump {
    name: &'static str,
    offset: usize,
    size: usize,
}

#[derive(Serialize)]
struct LayoutDump {
    name: &'static str,
    size: usize,
    align: usize,
    fields: Vec<FieldDump>,
}

fn layout_dumps() -> Vec<LayoutDump> {
    winstruct::all_structs()
        .iter()
        .map(|s| LayoutDump {
            name: s.name,
            size: s.size(),
            align: s.align(),
            fields: s
                .layout()
                .into_iter()
                .map(|(field, offset)| FieldDump {
                    name: field.name,
                    offset,
                    size: field.ty.size(),
                })
                .collect(),
        })
        .collect()
}

fn print<T: Serialize>(value: &T, compact: bool) {
    let json = if compact {
        serde_json::to_string(value).unwrap()
    } else {
        serde_json::to_string_pretty(value).unwrap()
    };
    println!("{json}");
}

fn main() {
    let args = Args::parse();

    if args.structs {
        print(&layout_dumps(), args.compact);
        return;
    }

    if args.dll.is_empty() {
        print(&api::all_tables(), args.compact);
        return;
    }

    let mut tables = Vec::with_capacity(args.dll.len());
    for name in &args.dll {
        match api::table_for(name) {
            Some(table) => tables.push(table),
            None => {
                eprintln!("no signature table for {name}");
                std::process::exit(1);
            }
        }
    }
    print(&tables, args.compact);
}
