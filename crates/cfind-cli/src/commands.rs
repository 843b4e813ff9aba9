//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List every resolved compiler
    List {
        /// Print compilers and issues as JSON
        #[arg(long)]
        json: bool,
        /// Fail when a compiler id is used by more than one language
        #[arg(long)]
        ensure_no_id_clash: bool,
    },

    /// Show one compiler, looked up by id or alias
    Show {
        /// Compiler id or alias
        id: String,
        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },
}
