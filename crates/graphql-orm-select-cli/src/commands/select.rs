use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_orm_select::OrmSelect;
use graphql_orm_select::OrmSelectOptions;
use graphql_orm_select::SelectionPath;
use graphql_orm_select::include::ShapeEnvelope;
use graphql_orm_select::operation::ResolveInfoBuilder;
use graphql_orm_select::transform::ExclusionSet;
use graphql_orm_select::transform::TYPENAME_META_FIELD;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SelectCmd {
    #[arg(
        default_values_t=[TYPENAME_META_FIELD.to_string()],
        help="Field names to drop wherever they are selected.",
        long,
        value_delimiter=',',
    )]
    pub(crate) exclude_fields: Vec<String>,

    #[arg(
        help="Dot-separated response keys from the operation root to the \
             field being resolved (e.g. `user.posts`). Defaults to the first \
             top-level field.",
        long,
    )]
    pub(crate) field_path: Option<String>,

    #[arg(
        help="Path to a GraphQL executable document containing the operation \
             and any fragments it spreads.",
        name="FILE_PATH",
        required=true,
    )]
    pub(crate) file_path: PathBuf,

    #[arg(
        help="Dot-separated path of a sub-selection to report as `current` \
             (e.g. `posts.author`).",
        long,
    )]
    pub(crate) get: Option<String>,

    #[arg(
        help="Name of the operation to use when the document defines more \
             than one.",
        long,
    )]
    pub(crate) operation_name: Option<String>,
}

#[derive(serde::Serialize)]
struct SelectOutput<'a> {
    original: &'a ShapeEnvelope,
    current: &'a ShapeEnvelope,
}

impl SelectCmd {
    fn select_json(self) -> anyhow::Result<String> {
        let mut builder = ResolveInfoBuilder::from_file(&self.file_path)
            .with_context(|| format!("Failed to load {:?}", self.file_path))?;
        if let Some(operation_name) = self.operation_name {
            builder = builder.set_operation_name(operation_name);
        }
        if let Some(field_path) = self.field_path {
            builder = builder.set_field_path(field_path);
        }
        let info = builder.build()
            .context("Failed to resolve the field to select for")?;

        let options = OrmSelectOptions {
            exclude_fields: ExclusionSet::new(self.exclude_fields),
            get: self.get.map(SelectionPath::from),
        };
        log::debug!("Selecting with {options:?}.");

        let orm_select = OrmSelect::new(&info, &options)?;
        let output = SelectOutput {
            original: orm_select.original(),
            current: orm_select.current(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for SelectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.select_json() {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
