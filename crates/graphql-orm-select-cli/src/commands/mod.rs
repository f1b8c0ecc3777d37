mod select;

use crate::Cli;
use crate::CommandResult;
use select::SelectCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Print the ORM `select`/`include` tree for one field of a GraphQL
    /// executable document.
    Select(Box<SelectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Select(cmd) => (*cmd).run(cli).await
        }
    }
}
