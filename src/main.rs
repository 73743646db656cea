use anyhow::Result;
use clap::Parser;

use locman::cli::commands::{configure, delete, edit, export, import, list};
use locman::cli::{Args, Command};
use locman::config::ResolveOptions;
use locman::output::{self, OutputConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    let config = ResolveOptions {
        store: args.store,
        keys: args.keys,
    };

    match args.command {
        Command::List { filter, search } => {
            let options = list::ListOptions {
                filter,
                search,
                config,
            };
            list::run_list(&options)?;
        }
        Command::Edit { id, text } => {
            let options = edit::EditOptions { id, text, config };
            edit::run_edit(&options)?;
        }
        Command::Delete { id, yes } => {
            let options = delete::DeleteOptions { id, yes, config };
            delete::run_delete(&options)?;
        }
        Command::Export { output } => {
            let options = export::ExportOptions { output, config };
            export::run_export(&options)?;
        }
        Command::Import { file } => {
            let options = import::ImportOptions { file, config };
            import::run_import(&options)?;
        }
        Command::Configure { show } => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}
