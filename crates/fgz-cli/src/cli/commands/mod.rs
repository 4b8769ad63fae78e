use super::args::{Cli, Command};
use crate::exit_codes::EXIT_SUCCESS;

pub mod pack;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Pack(args) => pack::run(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(EXIT_SUCCESS)
        }
    }
}
