use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pyramid_evalb::pyramid::merge_count;
use pyramid_evalb::transition::parse_actions;
use pyramid_evalb::{
    compose_table, reconstruct_inferred, ActionFormat, Baseline, CorpusEvaluator, CountingMerge,
    EvaluatorConfig,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "pyramid-evalb",
    about = "Crossing-bracket evaluation and pyramid composition for shift/reduce parses"
)]
struct Cli {
    /// Log per-sentence details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the span set implied by each action sequence (one per line).
    Brackets {
        /// Action sequences file.
        actions: PathBuf,
        /// Token vocabulary.
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
    },
    /// Count crossing brackets between aligned reference and hypothesis files.
    Crossing {
        /// Reference (gold) action sequences.
        #[arg(long)]
        reference: PathBuf,
        /// Hypothesis (predicted) action sequences.
        #[arg(long)]
        hypothesis: PathBuf,
        /// Token vocabulary.
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
        /// Skip malformed sentences instead of aborting.
        #[arg(long)]
        skip_malformed: bool,
        /// Print every crossing pair.
        #[arg(long)]
        pairs: bool,
    },
    /// Score a trivial tree shape against a reference corpus.
    Baseline {
        /// Reference (gold) action sequences.
        #[arg(long)]
        reference: PathBuf,
        /// Baseline tree shape.
        #[arg(long, value_enum, default_value_t = BaselineArg::Balanced)]
        kind: BaselineArg,
        /// Token vocabulary.
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,
    },
    /// Compose tokens with a bracketing merge and show the pyramid.
    Pyramid {
        /// Tokens to compose.
        #[arg(required = true)]
        tokens: Vec<String>,
        /// Print every layer, not only the root.
        #[arg(long)]
        layers: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Auto,
    Numeric,
    Symbolic,
}

impl From<FormatArg> for ActionFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => ActionFormat::Auto,
            FormatArg::Numeric => ActionFormat::Numeric,
            FormatArg::Symbolic => ActionFormat::Symbolic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BaselineArg {
    Left,
    Right,
    Balanced,
}

impl From<BaselineArg> for Baseline {
    fn from(arg: BaselineArg) -> Self {
        match arg {
            BaselineArg::Left => Baseline::LeftBranching,
            BaselineArg::Right => Baseline::RightBranching,
            BaselineArg::Balanced => Baseline::Balanced,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Brackets { actions, format } => run_brackets(actions, format.into())?,
        Commands::Crossing {
            reference,
            hypothesis,
            format,
            skip_malformed,
            pairs,
        } => run_crossing(
            reference,
            hypothesis,
            EvaluatorConfig::new()
                .with_action_format(format.into())
                .with_skip_malformed(skip_malformed)
                .with_keep_sentences(pairs)
                .with_verbose(cli.verbose),
        )?,
        Commands::Baseline {
            reference,
            kind,
            format,
        } => run_baseline(reference, kind.into(), format.into(), cli.verbose)?,
        Commands::Pyramid { tokens, layers } => run_pyramid(tokens, layers)?,
    }

    Ok(())
}

fn run_brackets(path: PathBuf, format: ActionFormat) -> Result<()> {
    let lines = read_lines(&path)?;

    for (idx, line) in lines.iter().enumerate() {
        let actions = parse_actions(line, format)
            .with_context(|| format!("invalid actions on line {}", idx + 1))?;
        let spans = reconstruct_inferred(&actions)
            .with_context(|| format!("reconstruction failed for line {}", idx + 1))?;

        println!(
            "line {}\tleaves={}\tspans={}\tfingerprint={}",
            idx + 1,
            actions.inferred_leaves()?,
            spans,
            spans.fingerprint().short()
        );
    }

    Ok(())
}

fn run_crossing(reference: PathBuf, hypothesis: PathBuf, config: EvaluatorConfig) -> Result<()> {
    let gold = read_lines(&reference)?;
    let pred = read_lines(&hypothesis)?;
    let print_pairs = config.keep_sentences;

    let mut evaluator = CorpusEvaluator::new(config);
    evaluator
        .evaluate_corpus(gold.iter().map(String::as_str), pred.iter().map(String::as_str))
        .context("crossing evaluation failed")?;

    if print_pairs {
        for sentence in evaluator.sentences() {
            let pairs: Vec<String> = sentence.crossings.iter().map(|p| p.to_string()).collect();
            println!(
                "sentence {}\tleaves={}\tcrossings={}\t{}",
                sentence.index + 1,
                sentence.leaves,
                sentence.crossing_count(),
                pairs.join("; ")
            );
        }
    }

    print!("{}", evaluator.report());
    Ok(())
}

fn run_baseline(
    reference: PathBuf,
    baseline: Baseline,
    format: ActionFormat,
    verbose: bool,
) -> Result<()> {
    let gold = read_lines(&reference)?;
    let mut evaluator = CorpusEvaluator::new(
        EvaluatorConfig::new()
            .with_action_format(format)
            .with_keep_sentences(false)
            .with_verbose(verbose),
    );

    for (idx, line) in gold.iter().enumerate() {
        let actions = parse_actions(line, format)
            .with_context(|| format!("invalid actions on line {}", idx + 1))?;
        let leaves = actions
            .inferred_leaves()
            .with_context(|| format!("cannot infer leaf count on line {}", idx + 1))?;
        evaluator
            .push(&actions, &baseline.actions(leaves))
            .with_context(|| format!("scoring failed for line {}", idx + 1))?;
    }

    info!(?baseline, sentences = gold.len(), "baseline scored");
    print!("{}", evaluator.report());
    Ok(())
}

fn run_pyramid(tokens: Vec<String>, show_layers: bool) -> Result<()> {
    let merge = CountingMerge::new(|left: &String, right: &String| format!("({} {})", left, right));
    let table = compose_table(&tokens, &merge).context("pyramid composition failed")?;

    if show_layers {
        for (level, layer) in table.layers().enumerate() {
            println!("layer {}\t{}", level, layer.join(" | "));
        }
    }

    if let Some(root) = table.root() {
        println!("root\t{}", root);
    }
    println!(
        "merges\t{} (expected {})",
        merge.calls(),
        merge_count(tokens.len())
    );
    Ok(())
}

/// Lines of a text file, trimmed; blank lines are kept so corpora stay aligned
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(contents.lines().map(|line| line.trim().to_string()).collect())
}
