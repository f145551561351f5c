use anyhow::{Context as _, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sample_gen::ast::class::GeneratedClass;
use sample_gen::context::Context;
use sample_gen::generator::ClassGenerator;
use sample_gen::policy::Policy;
use sample_gen::statistics::BatchStatistics;
use sample_gen::utils::write_as_ron;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const POLICY_FILE: &str = "policy.ron";
pub const STATISTICS_FILE: &str = "statistics.ron";

/// Persists generated classes under `<root>/<package>/`.
pub struct ClassWriter {
    root: PathBuf,
    package_dir: PathBuf,
    extension: &'static str,
}

impl ClassWriter {
    pub fn create(root: &Path, package: &str, extension: &'static str) -> Result<ClassWriter> {
        let package_dir = root.join(package);
        fs::create_dir_all(&package_dir)
            .with_context(|| format!("unable to create {}", package_dir.display()))?;
        Ok(ClassWriter {
            root: root.to_path_buf(),
            package_dir,
            extension,
        })
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    pub fn write_class(&self, class: &GeneratedClass) -> Result<PathBuf> {
        let path = self.package_dir.join(class.file_name(self.extension));
        fs::write(&path, class.source.as_bytes())
            .with_context(|| format!("unable to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote class");
        Ok(path)
    }

    pub fn write_policy(&self, policy: &Policy) -> Result<PathBuf> {
        self.write_ron(POLICY_FILE, policy)
    }

    pub fn write_statistics(&self, statistics: &BatchStatistics) -> Result<PathBuf> {
        self.write_ron(STATISTICS_FILE, statistics)
    }

    fn write_ron<S: Serialize>(&self, file_name: &str, object: &S) -> Result<PathBuf> {
        let path = self.root.join(file_name);
        let file = File::create(&path).with_context(|| format!("unable to create {}", path.display()))?;
        write_as_ron(BufWriter::new(file), object)
            .with_context(|| format!("unable to serialize {}", path.display()))?;
        Ok(path)
    }

    /// Generates and writes `count` classes, returning the batch totals.
    pub fn write_batch(
        &self,
        generator: &ClassGenerator,
        ctx: &mut Context,
        count: usize,
        show_progress: bool,
    ) -> Result<BatchStatistics> {
        let progress_bar = if show_progress {
            ProgressBar::new(count as u64)
        } else {
            ProgressBar::hidden()
        };
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Class {pos:>5}/{len:5} (ETA {eta})")
                .progress_chars("#>-"),
        );

        let mut statistics = BatchStatistics::default();
        for output in generator.batch(ctx, count) {
            self.write_class(&output.class)?;
            statistics.add(&output.statistics);
            progress_bar.inc(1);
        }
        progress_bar.finish();
        Ok(statistics)
    }
}
