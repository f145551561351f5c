use crate::ast::property::PropertyTy;
use crate::ast::section::SectionKind;
use serde::{Deserialize, Serialize};
use std::cmp::max;
use std::collections::BTreeMap;

/// Shape of one generated class, as measured by `StatisticsVisitor`.
#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassStatistics {
    pub num_properties: usize,
    pub num_methods: usize,
    pub num_locals: usize,
    pub num_clauses: usize,
    pub section_counter: BTreeMap<SectionKind, usize>,
    pub property_ty_counter: BTreeMap<PropertyTy, usize>,
    pub max_nesting_depth: usize,
}

impl ClassStatistics {
    pub fn total_sections(&self) -> usize {
        self.section_counter.values().sum()
    }
}

/// Running totals over a batch of classes.
#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BatchStatistics {
    pub num_classes: usize,
    pub total_properties: usize,
    pub total_methods: usize,
    pub total_sections: usize,
    pub min_methods: Option<usize>,
    pub max_methods: Option<usize>,
    pub min_properties: Option<usize>,
    pub max_properties: Option<usize>,
    pub max_nesting_depth: usize,
    pub section_counter: BTreeMap<SectionKind, usize>,
    pub property_ty_counter: BTreeMap<PropertyTy, usize>,
}

impl BatchStatistics {
    pub fn add(&mut self, stats: &ClassStatistics) {
        self.num_classes += 1;
        self.total_properties += stats.num_properties;
        self.total_methods += stats.num_methods;
        self.total_sections += stats.total_sections();
        self.min_methods = Some(self.min_methods.map_or(stats.num_methods, |m| m.min(stats.num_methods)));
        self.max_methods = Some(self.max_methods.map_or(stats.num_methods, |m| m.max(stats.num_methods)));
        self.min_properties = Some(
            self.min_properties
                .map_or(stats.num_properties, |m| m.min(stats.num_properties)),
        );
        self.max_properties = Some(
            self.max_properties
                .map_or(stats.num_properties, |m| m.max(stats.num_properties)),
        );
        self.max_nesting_depth = max(self.max_nesting_depth, stats.max_nesting_depth);
        for (kind, count) in &stats.section_counter {
            *self.section_counter.entry(*kind).or_insert(0) += count;
        }
        for (ty, count) in &stats.property_ty_counter {
            *self.property_ty_counter.entry(*ty).or_insert(0) += count;
        }
    }
}
