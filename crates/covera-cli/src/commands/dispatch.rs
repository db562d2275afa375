use covera_config::CoveraConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &CoveraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::handle(flags),
        Commands::Status(args) => commands::status::handle(&args, config, flags),
        Commands::Summary(args) => commands::summary::handle(&args, config, flags),
        Commands::Frameworks(args) => commands::frameworks::handle(&args, config, flags),
        Commands::Validate(args) => commands::validate::handle(&args, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
