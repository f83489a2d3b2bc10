#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pyramid_evalb::{Action, ActionSequence};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("PYRAMID_EVALB_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set PYRAMID_EVALB_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input
        .replace("\r\n", "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Well-formed tree over `leaves` leaves steered by `choices`.
///
/// While both moves are legal, a `true` choice shifts and `false` reduces;
/// once choices run out the walk prefers shifting.
pub fn random_tree(leaves: usize, choices: &[bool]) -> ActionSequence {
    let mut seq = ActionSequence::with_capacity(2 * leaves);
    let (mut shifted, mut depth) = (0, 0);
    let mut choices = choices.iter().copied();

    while shifted < leaves || depth > 1 {
        let can_shift = shifted < leaves;
        let can_reduce = depth >= 2;
        let shift = match (can_shift, can_reduce) {
            (true, true) => choices.next().unwrap_or(true),
            (can_shift, _) => can_shift,
        };
        if shift {
            seq.push(Action::Shift);
            shifted += 1;
            depth += 1;
        } else {
            seq.push(Action::Reduce);
            depth -= 1;
        }
    }
    seq
}
