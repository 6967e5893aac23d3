//! Reveal probe: print the frame sequence of a reveal plan.
//!
//! Walks an append run and a compare run without touching the terminal
//! screen, then replays the compare run through the timed animator. Useful
//! for eyeballing sweep behavior when changing the planner.

use redraft::diff::{change_map, RevealPlan, WordState, WordStatus};
use redraft::WordAnimator;
use std::time::Duration;

/// One-line notation for a frame: `[word]` marks the wave position,
/// `{old=>new}` marks a latched mismatch.
fn render(frame: &[WordState]) -> String {
    let parts: Vec<String> = frame
        .iter()
        .map(|word| match word.status {
            WordStatus::Animating => format!("[{}]", word.new_word),
            WordStatus::Mismatched => format!("{{{}=>{}}}", word.old_word, word.new_word),
            WordStatus::Normal => word.new_word.clone(),
        })
        .collect();
    parts.join(" ")
}

fn main() {
    println!("Redraft Reveal Probe");
    println!("====================");
    println!();

    let old = "the keeper lit the lamp at dusk";
    let new = "the keeper lit the beacon at dusk and waited";

    println!("Append run: {new:?}");
    let append = RevealPlan::new("", new, false);
    println!("  steps: {}", append.steps());
    for (step, frame) in append.frames().enumerate() {
        println!("  tick {step:>2}: {}", render(&frame));
    }
    println!();

    println!("Compare run: {old:?} -> {new:?}");
    let compare = RevealPlan::new(old, new, true);
    println!(
        "  steps: {}, positions: {}",
        compare.steps(),
        compare.positions()
    );
    println!("  initial: {}", render(&compare.initial_frame()));
    for (step, frame) in compare.frames().enumerate() {
        println!("  tick {step:>2}: {}", render(&frame));
    }
    println!();

    let markup = r#"the keeper lit the <span class="deleted">lamp</span> <span class="added">beacon</span> at dusk <span class="added">and waited</span>"#;
    let changes = change_map(markup);
    let mut entries: Vec<_> = changes.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    println!("Change map from markup:");
    for (word, kind) in entries {
        println!("  {kind}: {word:?}");
    }
    println!();

    // Timed replay at a brisk cadence; counts what actually arrives.
    let mut animator = WordAnimator::with_interval(Duration::from_millis(5));
    let frames = animator.play(RevealPlan::new(old, new, true));
    let mut delivered = 0usize;
    let mut last_step = 0usize;
    while let Ok(frame) = frames.recv() {
        delivered += 1;
        last_step = frame.step;
        if frame.is_last {
            break;
        }
    }
    println!("Animator delivered {delivered} frames (last at step {last_step}).");
}
