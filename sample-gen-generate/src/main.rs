mod writer;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use sample_gen::context::Context;
use sample_gen::dialect::Dialect;
use sample_gen::generator::ClassGenerator;
use sample_gen::policy::Policy;
use sample_gen::preset::{validate_class_count, Complexity};
use sample_gen::statistics::BatchStatistics;
use sample_gen::utils::write_as_ron;
use sample_gen::variance::DEFAULT_VARIANCE_CEILING;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use writer::ClassWriter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates batches of random Gosu class sources.")]
struct GeneratorArgs {
    #[clap(short, long, help = "Output root directory.")]
    path: PathBuf,
    #[clap(
        short,
        long,
        default_value_t = 50,
        allow_hyphen_values = true,
        help = "Number of classes to generate."
    )]
    classes: i64,
    #[clap(
        short = 'x',
        long,
        default_value = "SIMPLE",
        help = "Complexity preset: SIMPLE, COMPLEX or GORDIAN_KNOT."
    )]
    complexity: Complexity,
    #[clap(long, help = "Package name [default: the complexity preset].")]
    package: Option<String>,
    #[clap(long, default_value = "core", help = "Output dialect: core or extended.")]
    dialect: Dialect,
    #[clap(
        long,
        help = "Generation policy [default: default]. Use \"--policy help\" for a list of available policies."
    )]
    policy: Option<String>,
    #[clap(long, help = "Load the generation policy from a RON file.")]
    policy_file: Option<PathBuf>,
    #[clap(short, long, help = "Optional seed.")]
    seed: Option<u64>,
    #[clap(long, default_value_t = DEFAULT_VARIANCE_CEILING, help = "Variance ceiling in percent.")]
    max_variance: u32,
    #[clap(long, help = "Also write batch statistics.")]
    statistics: bool,
    #[clap(long, help = "Print classes to stdout instead of writing files.")]
    dry_run: bool,
}

fn resolve_policy(args: &GeneratorArgs) -> Result<Policy> {
    match (&args.policy, &args.policy_file) {
        (Some(_), Some(_)) => bail!("--policy and --policy-file are mutually exclusive"),
        (_, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("unable to read {}", path.display()))?;
            Ok(Policy::from_ron(&text)?)
        }
        (policy, None) => Ok(Policy::parse_policy_args(policy)?),
    }
}

fn run(args: GeneratorArgs) -> Result<()> {
    if args.policy.as_deref() == Some("help") {
        for name in Policy::get_policy_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let count = validate_class_count(args.classes)?;
    let preset = args.complexity.preset()?;
    let policy = resolve_policy(&args)?;
    let package = args
        .package
        .clone()
        .unwrap_or_else(|| args.complexity.to_string());
    let generator = ClassGenerator::from_preset(&preset, args.max_variance, package);
    let mut ctx = Context::with_policy(args.seed, &policy, args.dialect);

    info!(
        seed = ctx.seed,
        classes = count,
        complexity = %args.complexity,
        dialect = %args.dialect,
        policy = %policy.name,
        methods = preset.base_methods,
        properties = preset.base_properties,
        method_variance = generator.method_variance(),
        property_variance = generator.property_variance(),
        "generating classes"
    );

    if args.dry_run {
        let mut statistics = BatchStatistics::default();
        for output in generator.batch(&mut ctx, count) {
            println!("{}", output.class.source);
            statistics.add(&output.statistics);
        }
        if args.statistics {
            write_as_ron(std::io::stdout(), &statistics)?;
            println!();
        }
        return Ok(());
    }

    let writer = ClassWriter::create(
        &args.path,
        generator.package_name(),
        args.dialect.file_extension(),
    )?;
    writer.write_policy(&policy)?;
    let statistics = writer.write_batch(&generator, &mut ctx, count, true)?;
    if args.statistics {
        writer.write_statistics(&statistics)?;
    }
    info!(
        path = %writer.package_dir().display(),
        classes = statistics.num_classes,
        methods = statistics.total_methods,
        properties = statistics.total_properties,
        "finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = GeneratorArgs::parse();
    // Logs go to stderr so dry-run output on stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    run(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GeneratorArgs {
        GeneratorArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["sample-gen-generate", "-p", "out"]);
        assert_eq!(args.classes, 50);
        assert_eq!(args.complexity, Complexity::Simple);
        assert_eq!(args.dialect, Dialect::Core);
        assert_eq!(args.max_variance, 20);
        assert!(args.package.is_none());
    }

    #[test]
    fn complexity_and_dialect_parse() {
        let args = parse(&[
            "sample-gen-generate",
            "-p",
            "out",
            "-x",
            "gordian-knot",
            "--dialect",
            "extended",
        ]);
        assert_eq!(args.complexity, Complexity::GordianKnot);
        assert_eq!(args.dialect, Dialect::Extended);
    }

    #[test]
    fn unknown_complexity_is_rejected() {
        assert!(GeneratorArgs::try_parse_from(["sample-gen-generate", "-p", "out", "-x", "EASY"]).is_err());
    }

    #[test]
    fn non_positive_count_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let root_arg = root.to_str().unwrap();
        for count in ["0", "-4"] {
            let args = parse(&["sample-gen-generate", "-p", root_arg, "-c", count]);
            assert!(run(args).is_err());
        }
        assert!(!root.exists());
    }

    #[test]
    fn run_writes_package_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root_arg = dir.path().to_str().unwrap();
        let args = parse(&[
            "sample-gen-generate",
            "-p",
            root_arg,
            "-c",
            "3",
            "-s",
            "11",
            "--statistics",
        ]);
        run(args).unwrap();
        let package_dir = dir.path().join("SIMPLE");
        assert!(package_dir.is_dir());
        assert!(std::fs::read_dir(&package_dir).unwrap().count() >= 1);
        assert!(dir.path().join(writer::POLICY_FILE).exists());
        assert!(dir.path().join(writer::STATISTICS_FILE).exists());
    }

    #[test]
    fn conflicting_policy_sources() {
        let args = parse(&[
            "sample-gen-generate",
            "-p",
            "out",
            "--policy",
            "deep",
            "--policy-file",
            "deep.ron",
        ]);
        assert!(resolve_policy(&args).is_err());
    }

    #[test]
    fn policy_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.ron");
        write_as_ron(std::fs::File::create(&path).unwrap(), Policy::flat()).unwrap();
        let args = parse(&[
            "sample-gen-generate",
            "-p",
            "out",
            "--policy-file",
            path.to_str().unwrap(),
        ]);
        assert_eq!(resolve_policy(&args).unwrap(), Policy::flat());
    }
}
