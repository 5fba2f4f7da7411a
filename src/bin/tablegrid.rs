use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tablegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a table JSON document and check that both axes resolve.
    Validate(ValidateArgs),
    /// Print resolved cell rectangles as JSON.
    Resolve(ResolveArgs),
    /// Print the content grid, one tab-separated line per row.
    Content(ContentArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the table's absolute width.
    #[arg(long)]
    width: Option<f64>,

    /// Override the table's absolute height.
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Input table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Content(args) => cmd_content(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<tablegrid::Table> {
    tablegrid::Table::from_path(path).with_context(|| format!("load table '{}'", path.display()))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let table = load(&args.in_path)?;
    println!(
        "ok: {} rows x {} columns ({} auto rows, {} auto columns)",
        table.row_count(),
        table.column_count(),
        table.row_layout().auto_count(),
        table.column_layout().auto_count(),
    );
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let table = load(&args.in_path)?;

    let mut builder = table.into_builder();
    let (width, height) = (builder.options().width, builder.options().height);
    builder.size(args.width.unwrap_or(width), args.height.unwrap_or(height));

    let geometry = builder.resolve().context("resolve table geometry")?;
    let out = serde_json::to_string_pretty(&geometry.resolved_cells())
        .context("encode resolved cells")?;
    println!("{out}");
    Ok(())
}

fn cmd_content(args: ContentArgs) -> anyhow::Result<()> {
    let table = load(&args.in_path)?;
    table.content().for_each_row(|_, row| println!("{}", row.join("\t")));
    Ok(())
}
