use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use apexdocfix::{FormatOptions, io::rewrite, process_stream_opts};
use clap::Parser;
use rayon::prelude::*;

#[derive(Parser)]
#[command(about = "Normalise ApexDoc comments in Apex source files", version)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    layout: LayoutOpts,
    /// Apex source files to normalise
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct LayoutOpts {
    /// Maximum rendered line width
    #[arg(long = "print-width", default_value_t = 80)]
    print_width: usize,
    /// Columns per indentation level
    #[arg(long = "tab-width", default_value_t = 2)]
    tab_width: usize,
    /// Treat indentation as tab characters
    #[arg(long = "use-tabs")]
    use_tabs: bool,
}

impl LayoutOpts {
    fn options(self) -> FormatOptions {
        FormatOptions {
            print_width: self.print_width,
            tab_width: self.tab_width,
            use_tabs: self.use_tabs,
            ..FormatOptions::default()
        }
    }
}

fn process_file(path: &Path, opts: &FormatOptions) -> anyhow::Result<String> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    Ok(process_stream_opts(&lines, opts).join("\n"))
}

/// Entry point for the command-line tool that normalises ApexDoc comments.
///
/// With no file arguments the tool reads standard input and prints the
/// normalised stream. File arguments are processed in parallel; output is
/// printed in argument order, or written back with `--in-place`.
///
/// # Examples
///
/// ```sh
/// # Normalise a class file and print to stdout
/// apexdocfix Widget.cls
///
/// # Normalise in place, wrapping prose at 100 columns
/// apexdocfix --in-place --print-width 100 Widget.cls
///
/// # Normalise from standard input
/// cat Widget.cls | apexdocfix
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let opts = cli.layout.options();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let lines: Vec<String> = input.lines().map(str::to_string).collect();
        println!("{}", process_stream_opts(&lines, &opts).join("\n"));
        return Ok(());
    }

    if cli.in_place {
        cli.files
            .par_iter()
            .try_for_each(|path| rewrite(path, &opts))?;
        return Ok(());
    }

    let outputs: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| process_file(path, &opts))
        .collect();
    for output in outputs {
        println!("{}", output?);
    }
    Ok(())
}
