use crate::ast::class::{ClassDecl, GeneratedClass};
use crate::context::Context;
use crate::preset::GenerationPreset;
use crate::statistics::ClassStatistics;
use crate::variance::{clamp_variance, sample_variance};
use crate::visitor::base_visitor::Visitor;
use crate::visitor::emit_visitor::EmitVisitor;
use crate::visitor::statistics_visitor::StatisticsVisitor;
use tracing::debug;

pub struct GeneratorOutput {
    pub class: GeneratedClass,
    pub statistics: ClassStatistics,
}

/// Composes whole classes from a preset's base counts.
///
/// The generator itself is immutable; all randomness comes from the
/// [`Context`] passed to each call, so one generator can serve several
/// threads as long as every thread owns its context.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassGenerator {
    num_methods: usize,
    num_properties: usize,
    method_variance: f64,
    property_variance: f64,
    package_name: String,
}

impl ClassGenerator {
    pub fn new(
        num_methods: usize,
        num_properties: usize,
        method_variance: f64,
        property_variance: f64,
        package_name: impl Into<String>,
    ) -> ClassGenerator {
        ClassGenerator {
            num_methods,
            num_properties,
            method_variance,
            property_variance,
            package_name: package_name.into(),
        }
    }

    /// Builds a generator from a preset, capping both variance percentages at `max_variance`.
    pub fn from_preset(
        preset: &GenerationPreset,
        max_variance: u32,
        package_name: impl Into<String>,
    ) -> ClassGenerator {
        ClassGenerator::new(
            preset.base_methods,
            preset.base_properties,
            clamp_variance(preset.method_variance_pct, max_variance),
            clamp_variance(preset.property_variance_pct, max_variance),
            package_name,
        )
    }

    pub fn method_variance(&self) -> f64 {
        self.method_variance
    }

    pub fn property_variance(&self) -> f64 {
        self.property_variance
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Samples the actual counts and builds the class tree.
    pub fn generate_class(&self, ctx: &mut Context) -> ClassDecl {
        let num_methods = sample_count(ctx, self.num_methods, self.method_variance);
        let num_properties = sample_count(ctx, self.num_properties, self.property_variance);
        ClassDecl::generate_class(ctx, &self.package_name, num_properties, num_methods)
    }

    pub fn generate(&self, ctx: &mut Context) -> GeneratorOutput {
        let class = self.generate_class(ctx);
        let statistics = StatisticsVisitor::collect(&class);
        let mut emit_visitor = EmitVisitor::new(ctx.dialect);
        emit_visitor.visit_class(&class);
        debug!(
            name = %class.name,
            methods = statistics.num_methods,
            properties = statistics.num_properties,
            depth = statistics.max_nesting_depth,
            "generated class"
        );
        GeneratorOutput {
            class: GeneratedClass {
                name: class.name,
                source: emit_visitor.into_output(),
            },
            statistics,
        }
    }

    pub fn make_class(&self, ctx: &mut Context) -> GeneratedClass {
        self.generate(ctx).class
    }

    /// Lazily generates `count` classes. Dropping the iterator stops the batch
    /// at the next class boundary.
    pub fn batch<'a>(&'a self, ctx: &'a mut Context, count: usize) -> ClassBatch<'a> {
        ClassBatch {
            generator: self,
            ctx,
            remaining: count,
        }
    }
}

/// Variance-sampled count, clamped to zero.
fn sample_count(ctx: &mut Context, base: usize, variance: f64) -> usize {
    let base = i64::try_from(base).unwrap_or(i64::MAX);
    usize::try_from(sample_variance(&mut ctx.rng, base, variance)).unwrap_or(0)
}

pub struct ClassBatch<'a> {
    generator: &'a ClassGenerator,
    ctx: &'a mut Context,
    remaining: usize,
}

impl Iterator for ClassBatch<'_> {
    type Item = GeneratorOutput;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.generate(self.ctx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ClassBatch<'_> {}
