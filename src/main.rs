use clap::Parser;
use clap_verbosity_flag::Verbosity;
use sh_print::FileNode;
use std::io::{IsTerminal, Read, Write};

#[derive(Parser)]
#[command(name = "sh-print")]
#[command(about = "Print a JSON-encoded shell syntax tree as shell source")]
#[command(version)]
struct Cli {
    /// Read the tree from this JSON string
    #[arg(short = 'c')]
    tree: Option<String>,

    #[command(flatten)]
    verbose: Verbosity,

    /// JSON file holding the tree
    #[arg()]
    tree_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    // Determine tree source: -c, file, or stdin
    let input = if let Some(s) = cli.tree {
        s
    } else if let Some(ref file) = cli.tree_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read tree file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        if std::io::stdin().is_terminal() {
            eprintln!("Error: No tree provided. Use -c 'json', provide a file, or pipe via stdin.");
            std::process::exit(1);
        }
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error: Cannot read stdin: {}", e);
            std::process::exit(1);
        }
        buf
    };

    let file: FileNode = match serde_json::from_str(&input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: Invalid tree: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("decoded tree with {} statements", file.stmts.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = sh_print::fprint(&mut out, &file).and_then(|()| {
        if !file.stmts.is_empty() {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
