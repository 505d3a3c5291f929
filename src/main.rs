// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use gba_iomap::{
    hardware::RegisterTable,
    iomap::MapBuilder,
    output::{create_output_file, generate_map_listing, generate_register_defs},
};

#[derive(Parser)]
#[command(name = "gba-iomap")]
#[command(about = "Generate GBA I/O register map listings")]
struct Args {
    /// Output file for the listing (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail when two same-width registers claim the same address
    #[arg(long)]
    strict: bool,

    /// Emit register-constant declarations instead of the map listing
    #[arg(long)]
    defs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let table = RegisterTable::gba();
    let description = if args.defs { "defs listing" } else { "map listing" };

    match &args.output {
        Some(path) => {
            let mut file = create_output_file(path, description)?;
            generate(&args, &table, &mut file)?;
            println!("Generated: {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            generate(&args, &table, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn generate(args: &Args, table: &RegisterTable, sink: &mut impl Write) -> Result<()> {
    if args.defs {
        return generate_register_defs(table, sink);
    }

    let builder = if args.strict {
        MapBuilder::strict()
    } else {
        MapBuilder::new()
    };
    let maps = builder.build(table)?;
    generate_map_listing(&maps, sink)
}
