use anyhow::{Context, Result};
use pyramid_evalb::transition::{parse_actions, right_branching};
use pyramid_evalb::{compose_table, ActionFormat, Baseline, CorpusEvaluator, EvaluatorConfig};

fn main() -> Result<()> {
    let gold = [
        "0 0 1 0 0 1 1",
        "0 0 0 1 0 1 1 0 1",
        "0 0 0 0 1 1 1",
        "2 2 0 0 1",
    ];

    println!("Baseline comparison against {} reference trees", gold.len());
    for baseline in [
        Baseline::LeftBranching,
        Baseline::RightBranching,
        Baseline::Balanced,
    ] {
        let mut evaluator = CorpusEvaluator::new(EvaluatorConfig::new().with_keep_sentences(false));
        for line in gold {
            let actions = parse_actions(line, ActionFormat::Numeric)
                .with_context(|| format!("bad reference line '{}'", line))?;
            let leaves = actions.inferred_leaves()?;
            evaluator.push(&actions, &baseline.actions(leaves))?;
        }
        let report = evaluator.finish();
        println!(
            "{:?}\tcrossings={}\tF1={:.2}",
            baseline,
            report.crossing_brackets,
            report.f1()
        );
    }

    let words: Vec<String> = ["the", "old", "man", "the", "boats"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let table = compose_table(&words, &|l: &String, r: &String| format!("({} {})", l, r))?;
    println!("Pyramid over {} words, {} merges", table.width(), table.merges());
    if let Some(root) = table.root() {
        println!("root = {}", root);
    }

    println!(
        "Right-branching actions for 5 words: {}",
        right_branching(words.len())
    );
    Ok(())
}
