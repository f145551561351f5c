use crate::ast::class::ClassDecl;
use crate::ast::method::{LocalVar, MethodDecl};
use crate::ast::property::PropertyDecl;
use crate::ast::section::{Condition, ForSection, IfSection, Section};
use crate::statistics::ClassStatistics;
use crate::visitor::base_visitor::{
    walk_for_section, walk_if_section, walk_method, walk_section, Visitor,
};
use std::cmp::max;

#[derive(Default)]
pub struct StatisticsVisitor {
    pub statistics: ClassStatistics,
    block_depth: usize,
}

impl StatisticsVisitor {
    pub fn collect(class: &ClassDecl) -> ClassStatistics {
        let mut visitor = StatisticsVisitor::default();
        visitor.visit_class(class);
        visitor.statistics
    }

    fn enter_block(&mut self) {
        self.block_depth += 1;
        self.statistics.max_nesting_depth = max(self.statistics.max_nesting_depth, self.block_depth);
    }
}

impl Visitor for StatisticsVisitor {
    fn visit_property(&mut self, property: &PropertyDecl) {
        self.statistics.num_properties += 1;
        *self
            .statistics
            .property_ty_counter
            .entry(property.ty)
            .or_insert(0) += 1;
    }

    fn visit_method(&mut self, method: &MethodDecl) {
        self.statistics.num_methods += 1;
        walk_method(self, method);
    }

    fn visit_local(&mut self, _local: &LocalVar) {
        self.statistics.num_locals += 1;
    }

    fn visit_section(&mut self, section: &Section) {
        *self
            .statistics
            .section_counter
            .entry(section.kind())
            .or_insert(0) += 1;
        walk_section(self, section);
    }

    fn visit_if_section(&mut self, section: &IfSection) {
        self.enter_block();
        walk_if_section(self, section);
        self.block_depth -= 1;
    }

    fn visit_for_section(&mut self, section: &ForSection) {
        self.enter_block();
        walk_for_section(self, section);
        self.block_depth -= 1;
    }

    fn visit_condition(&mut self, condition: &Condition) {
        self.statistics.num_clauses += condition.num_clauses();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::section::SectionKind;
    use crate::context::Context;
    use crate::dialect::Dialect;
    use crate::policy::{Policy, PolicyBuilder};

    #[test]
    fn measures_generated_class() {
        let policy = PolicyBuilder::from_policy(Policy::default())
            .max_depth(2)
            .build()
            .unwrap();
        let mut ctx = Context::with_policy(Some(30), &policy, Dialect::Core);
        let class = ClassDecl::generate_class(&mut ctx, "pkg", 4, 6);
        let stats = StatisticsVisitor::collect(&class);

        assert_eq!(stats.num_properties, 4);
        assert_eq!(stats.num_methods, 6);
        assert_eq!(stats.max_nesting_depth, 2);
        assert_eq!(stats.property_ty_counter.values().sum::<usize>(), 4);
        let top_level: usize = class.methods.iter().map(|m| m.sections.len()).sum();
        let blocks = stats.section_counter.get(&SectionKind::If).copied().unwrap_or(0)
            + stats.section_counter.get(&SectionKind::For).copied().unwrap_or(0);
        assert!(blocks >= top_level);
    }

    #[test]
    fn flat_policy_has_no_blocks() {
        let mut ctx = Context::with_policy(Some(31), &Policy::flat(), Dialect::Core);
        let class = ClassDecl::generate_class(&mut ctx, "pkg", 1, 10);
        let stats = StatisticsVisitor::collect(&class);
        assert_eq!(stats.max_nesting_depth, 0);
        assert!(!stats.section_counter.contains_key(&SectionKind::If));
        assert!(!stats.section_counter.contains_key(&SectionKind::For));
    }
}
