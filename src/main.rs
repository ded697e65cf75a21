mod cli;

use anyhow::Result;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Parser,
};
use enum_dispatch::enum_dispatch;
use env_logger::Env;
use log::debug;

use cli::{Check, Command, Generate, Scrub, Tag};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Quaternary Hamming barcodes for sequencing reads
#[derive(Parser, Debug)]
#[command(version, styles = STYLES)]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[enum_dispatch(Command)]
#[derive(Parser, Debug)]
enum Subcommand {
    #[command(display_order = 1)]
    Generate(Generate),
    #[command(display_order = 2)]
    Check(Check),
    #[command(display_order = 3)]
    Scrub(Scrub),
    #[command(display_order = 4)]
    Tag(Tag),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    debug!("{:?}", args.subcommand);
    args.subcommand.execute()
}
