//! Story Review Demo: a scripted drafting agent replayed against the live
//! review surface.
//!
//! A background thread stands in for the agent. It publishes a first draft
//! and pauses for confirmation, then publishes an edited revision with diff
//! markup and pauses again. The foreground session animates each revision
//! word by word at the default cadence.
//!
//! Press 'y' to confirm, 'n' to reject, 'q' or Escape to quit.

use redraft::agent::{self, AgentPort};
use redraft::{Resolution, ReviewSession, SessionConfig, StoryContent, StorySnapshot, TermGuard};
use std::time::Duration;

const INPUT: &str = "Write a short story about a lighthouse keeper.";

const DRAFT: &str = "Maren kept the lamp at Saltholm Point for thirty years. \
Every evening she climbed the spiral stair, trimmed the wick, and wound the \
clockwork that turned the great lens. Ships passed in the dark and never \
learned her name, which suited her fine. The sea gave her weather, the \
weather gave her work, and the work gave her a reason to watch the horizon. \
On the night the supply boat failed to arrive, she lit the lamp early and \
waited.";

const EDITED: &str = "Maren kept the lamp at Saltholm Point for forty years. \
Every evening she climbed the iron stair, trimmed the wick, and wound the \
clockwork that turned the great lens. Ships passed in the dark and never \
learned her name, which suited her well. The sea gave her weather, the \
weather gave her work, and the work gave her a reason to watch the horizon. \
On the night the supply boat failed to arrive, she lit the lamp early and \
waited. Nobody came, but the beam swept on until morning.";

/// Diff fragment the agent would ship alongside the edit.
const DIFF_MARKUP: &str = r#"<p>Maren kept the lamp at Saltholm Point for <span class="deleted">thirty</span> <span class="added">forty</span> years. Every evening she climbed the <span class="deleted">spiral</span> <span class="added">iron</span> stair, trimmed the wick, and wound the clockwork that turned the great lens. Ships passed in the dark and never learned her name, which suited her <span class="deleted">fine.</span> <span class="added">well.</span> The sea gave her weather, the weather gave her work, and the work gave her a reason to watch the horizon. On the night the supply boat failed to arrive, she lit the lamp early and waited. <span class="added">Nobody came, but the beam swept on until morning.</span></p>"#;

fn content(story: &str) -> StoryContent {
    StoryContent {
        title: "The Keeper of Saltholm Point".to_owned(),
        story: story.to_owned(),
        genre: "Literary fiction".to_owned(),
        summary: "A lighthouse keeper holds her post the night the supply boat fails."
            .to_owned(),
    }
}

/// The scripted agent: draft, pause, edit, pause, settle.
fn run_agent(port: &AgentPort) {
    port.update(StorySnapshot {
        input: INPUT.to_owned(),
        story_content: Some(content(DRAFT)),
        pending_confirmation: true,
        ..StorySnapshot::default()
    });
    let first = match port.interrupt("Keep this draft?") {
        Some(resolution) => resolution,
        None => return,
    };

    if first == Resolution::Cancel {
        // Draft rejected: back to the empty page.
        port.update(StorySnapshot {
            input: INPUT.to_owned(),
            ..StorySnapshot::default()
        });
        port.close();
        return;
    }

    // Settle the draft, then let it sit before the edit arrives.
    port.update(StorySnapshot {
        input: INPUT.to_owned(),
        story_content: Some(content(DRAFT)),
        ..StorySnapshot::default()
    });
    std::thread::sleep(Duration::from_millis(1500));

    port.update(StorySnapshot {
        input: INPUT.to_owned(),
        story_content: Some(content(EDITED)),
        previous_story_content: Some(content(DRAFT)),
        pending_confirmation: true,
        is_edit: true,
        diff_markup: Some(DIFF_MARKUP.to_owned()),
    });
    let second = match port.interrupt("Apply this edit?") {
        Some(resolution) => resolution,
        None => return,
    };

    let settled = if second == Resolution::Confirm {
        EDITED
    } else {
        DRAFT
    };
    port.update(StorySnapshot {
        input: INPUT.to_owned(),
        story_content: Some(content(settled)),
        ..StorySnapshot::default()
    });
    port.close();
}

fn main() -> std::io::Result<()> {
    println!("Redraft Story Review Demo");
    println!("=========================");
    println!("A scripted agent drafts a story, then edits it.");
    println!("Press 'y' to confirm, 'n' to reject, 'q' or Escape to quit.\n");

    std::thread::sleep(Duration::from_secs(2));

    let (port, handle) = agent::pair(8);
    let script = std::thread::Builder::new()
        .name("story-agent".into())
        .spawn(move || run_agent(&port))?;

    let (width, height) = TermGuard::size()?;
    ReviewSession::new(SessionConfig::default(), width, height).run(&handle)?;

    // Dropping the handle unblocks a script still waiting on a resolution.
    drop(handle);
    let _ = script.join();
    Ok(())
}
