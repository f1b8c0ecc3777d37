use crate::include::IncludeTree;
use crate::loc;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpread;
use crate::transform::ExclusionSet;
use crate::transform::FragmentLookup;
use crate::transform::SelectionTransformer;
use crate::transform::TransformError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, TransformError>;

/// Every fragment available to an operation, pre-transformed into its
/// [`IncludeTree`] so spreads are substituted by lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentTable {
    fragments: IndexMap<String, IncludeTree>,
}

impl FragmentTable {
    /// Transform every definition in `definitions`, eagerly and fully.
    ///
    /// Fragments that spread other fragments are resolved depth-first, so
    /// definition order does not matter. Fails if any fragment spreads an
    /// undefined fragment or if spreads form a cycle.
    pub fn build(
        definitions: &IndexMap<String, FragmentDefinition>,
        exclusions: &ExclusionSet,
    ) -> Result<Self> {
        FragmentTableBuilder {
            definitions,
            exclusions,
            in_progress: vec![],
            resolved: IndexMap::new(),
        }.build()
    }

    pub fn contains_key(&self, fragment_name: &str) -> bool {
        self.fragments.contains_key(fragment_name)
    }

    pub fn get(&self, fragment_name: &str) -> Option<&IncludeTree> {
        self.fragments.get(fragment_name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IncludeTree> {
        self.fragments.iter()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

impl FragmentLookup for &FragmentTable {
    fn lookup_fragment(&mut self, spread: &FragmentSpread) -> Result<IncludeTree> {
        self.get(spread.fragment_name())
            .cloned()
            .ok_or_else(|| TransformError::UndefinedFragment {
                fragment_name: spread.fragment_name().to_string(),
                spread_location: spread.def_location().to_owned(),
            })
    }
}

struct FragmentTableBuilder<'a> {
    definitions: &'a IndexMap<String, FragmentDefinition>,
    exclusions: &'a ExclusionSet,
    in_progress: Vec<String>,
    resolved: IndexMap<String, IncludeTree>,
}

impl<'a> FragmentTableBuilder<'a> {
    fn build(mut self) -> Result<FragmentTable> {
        let definitions = self.definitions;
        for (fragment_name, definition) in definitions {
            self.resolve(fragment_name, definition.def_location())?;
        }

        log::debug!("Built a fragment table of {} fragment(s).", definitions.len());

        let fragments = definitions.keys()
            .filter_map(|fragment_name| {
                self.resolved.shift_remove(fragment_name)
                    .map(|tree| (fragment_name.to_owned(), tree))
            })
            .collect();

        Ok(FragmentTable { fragments })
    }

    fn resolve(
        &mut self,
        fragment_name: &str,
        spread_location: &loc::SourceLocation,
    ) -> Result<IncludeTree> {
        if let Some(tree) = self.resolved.get(fragment_name) {
            return Ok(tree.to_owned());
        }

        if let Some(cycle_start) = self.in_progress.iter().position(|name| name == fragment_name) {
            let mut cycle = self.in_progress[cycle_start..].to_vec();
            cycle.push(fragment_name.to_string());
            return Err(TransformError::FragmentCycle { cycle });
        }

        let definitions = self.definitions;
        let definition = definitions.get(fragment_name).ok_or_else(|| {
            TransformError::UndefinedFragment {
                fragment_name: fragment_name.to_string(),
                spread_location: spread_location.to_owned(),
            }
        })?;

        self.in_progress.push(fragment_name.to_string());
        let exclusions = self.exclusions;
        let tree = SelectionTransformer::new(exclusions, &mut *self)
            .transform(definition.selections());
        self.in_progress.pop();
        let tree = tree?;

        log::trace!("Resolved the `{fragment_name}` fragment.");
        self.resolved.insert(fragment_name.to_string(), tree.to_owned());
        Ok(tree)
    }
}

impl FragmentLookup for &mut FragmentTableBuilder<'_> {
    fn lookup_fragment(&mut self, spread: &FragmentSpread) -> Result<IncludeTree> {
        self.resolve(spread.fragment_name(), spread.def_location())
    }
}
