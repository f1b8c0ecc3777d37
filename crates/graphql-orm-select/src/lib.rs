//! Turns the selection set of a single GraphQL resolver invocation into the
//! nested `select`/`include` tree a relational ORM consumes, so a resolver
//! fetches exactly the relations and fields the client asked for.
//!
//! ```
//! use graphql_orm_select::OrmSelect;
//! use graphql_orm_select::OrmSelectOptions;
//! use graphql_orm_select::operation::ResolveInfoBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let info = ResolveInfoBuilder::from_str(
//!     "query { user { name posts { title } } }",
//!     None,
//! )?
//! .build()?;
//!
//! let orm_select = OrmSelect::new(&info, &OrmSelectOptions::default())?;
//! assert!(orm_select.select().is_some());
//! # Ok(())
//! # }
//! ```

pub mod ast;
mod file_reader;
pub mod include;
pub mod loc;
pub mod operation;
mod orm_select;
mod orm_select_options;
mod selection_path;
pub mod transform;

pub use file_reader::ReadContentError;
pub use orm_select::OrmSelect;
pub use orm_select::OrmSelectError;
pub use orm_select_options::OrmSelectOptions;
pub use selection_path::SelectionPath;
pub use selection_path::SelectionPathError;

#[cfg(test)]
mod tests;
