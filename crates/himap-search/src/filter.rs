use std::collections::HashSet;
use std::hash::Hash;

use himap_core::facets::{Coed, Establishment, SchoolType};
use himap_core::types::School;

/// Active facet selections.
///
/// Values within one category are alternatives; categories combine with
/// AND. An empty category places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub types: HashSet<SchoolType>,
    pub coed: HashSet<Coed>,
    pub establishment: HashSet<Establishment>,
    pub region: Option<String>,
}

impl FilterState {
    pub fn new() -> Self { Self::default() }

    pub fn with_type(mut self, t: SchoolType) -> Self { self.types.insert(t); self }
    pub fn with_coed(mut self, c: Coed) -> Self { self.coed.insert(c); self }
    pub fn with_establishment(mut self, e: Establishment) -> Self { self.establishment.insert(e); self }
    pub fn with_region(mut self, region: impl Into<String>) -> Self { self.set_region(region); self }

    pub fn toggle_type(&mut self, t: SchoolType) { toggle(&mut self.types, t); }
    pub fn toggle_coed(&mut self, c: Coed) { toggle(&mut self.coed, c); }
    pub fn toggle_establishment(&mut self, e: Establishment) { toggle(&mut self.establishment, e); }

    /// Replaces the region. An empty string means "all regions".
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        self.region = if region.is_empty() { None } else { Some(region) };
    }

    pub fn reset(&mut self) { *self = Self::default(); }

    /// True when at least one category narrows the result.
    pub fn is_active(&self) -> bool {
        !self.types.is_empty() || !self.coed.is_empty() || !self.establishment.is_empty() || self.region_constraint().is_some()
    }

    pub fn matches(&self, school: &School) -> bool {
        facet_allows(&self.types, SchoolType::from_code(&school.school_type))
            && facet_allows(&self.coed, Coed::from_code(&school.coed))
            && facet_allows(&self.establishment, Establishment::from_code(&school.establishment))
            && self.region_constraint().map_or(true, |r| school.region == r)
    }

    fn region_constraint(&self) -> Option<&str> { self.region.as_deref().filter(|r| !r.is_empty()) }
}

/// Order-preserving subset of `records` accepted by `state`.
pub fn filter<'a>(records: &'a [School], state: &FilterState) -> Vec<&'a School> {
    records.iter().filter(|s| state.matches(s)).collect()
}

fn facet_allows<T: Eq + Hash>(selected: &HashSet<T>, value: Option<T>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(&v))
}

fn toggle<T: Eq + Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) { set.insert(value); }
}
