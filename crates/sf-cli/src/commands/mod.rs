pub mod check;
pub mod export;
pub mod play;
pub mod scenes;
pub mod simulate;

use colored::{ColoredString, Colorize};

use sf_story::{Mood, SceneGraph, SceneId, Transition};

/// Split narration into sentences, one paragraph each.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split_inclusive(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Color a line of narration by scene mood.
pub fn paint(text: &str, mood: Mood) -> ColoredString {
    match mood {
        Mood::Calm => text.normal(),
        Mood::Tense => text.yellow(),
        Mood::Alarm => text.red().bold(),
    }
}

/// Short description of where a transition leads.
pub fn describe_transition(transition: &Transition) -> String {
    match transition {
        Transition::Goto(id) => id.to_string(),
        Transition::Branch(policy) => {
            let targets: Vec<&str> = policy.targets().iter().map(|t| t.name()).collect();
            format!("{policy}: {}", targets.join(" | "))
        }
    }
}

/// Check the story graph and return it, or the issues found.
fn load_story() -> Result<SceneGraph, String> {
    let graph = sf_story::spearfishing();
    let issues = graph.validate(SceneId::Title);
    if issues.is_empty() {
        Ok(graph)
    } else {
        let listed: Vec<String> = issues.iter().map(|i| format!("  {i}")).collect();
        Err(format!("story graph is invalid:\n{}", listed.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_story::BranchPolicy;

    #[test]
    fn splits_on_sentence_boundaries() {
        assert_eq!(
            sentences("You catch a massive tuna. Everyone will be jealous of this catch!"),
            vec!["You catch a massive tuna.", "Everyone will be jealous of this catch!"]
        );
    }

    #[test]
    fn keeps_ellipses_together() {
        assert_eq!(
            sentences("Empty handed... Try again"),
            vec!["Empty handed...", "Try again"]
        );
    }

    #[test]
    fn describes_branches() {
        assert_eq!(
            describe_transition(&Transition::Branch(BranchPolicy::Drift)),
            "drift distance: drift_lost | drift_island"
        );
        assert_eq!(describe_transition(&Transition::Goto(SceneId::Reef)), "reef");
    }

    #[test]
    fn story_loads() {
        assert!(load_story().is_ok());
    }
}
