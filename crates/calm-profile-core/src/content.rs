use crate::archetype::Archetype;

/// Primary collaboration platform captured by the context form. Only the
/// recommended tool stack varies by platform; strengths, quick wins, and
/// taglines are platform-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Microsoft,
    Google,
    Slack,
    Other,
}

impl Platform {
    /// Lenient parse of the wire value; unknown platforms read as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "microsoft" => Some(Self::Microsoft),
            "google" => Some(Self::Google),
            "slack" => Some(Self::Slack),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Canned content attached to a primary archetype.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationBundle {
    pub strengths: &'static [&'static str],
    pub quick_wins: &'static [&'static str],
    pub tool_stack: &'static [&'static str],
    pub tagline: &'static str,
}

static ARCHITECT: RecommendationBundle = RecommendationBundle {
    strengths: &[
        "repeatable delivery",
        "risk foresight",
        "documentation clarity",
    ],
    quick_wins: &["replace daily live standup with async form + weekly alignment"],
    tool_stack: &["microsoft 365", "planner", "sharepoint", "power automate"],
    tagline: "systematic builder of scalable operational frameworks",
};

static CONDUCTOR: RecommendationBundle = RecommendationBundle {
    strengths: &[
        "cross-team alignment",
        "momentum management",
        "meeting facilitation",
    ],
    quick_wins: &["introduce decision logs to cut meeting drag"],
    tool_stack: &["slack", "asana", "loom", "linear"],
    tagline: "real-time orchestrator of team dynamics and collaboration",
};

static CURATOR: RecommendationBundle = RecommendationBundle {
    strengths: &[
        "divergent thinking",
        "pattern spotting",
        "creative direction",
    ],
    quick_wins: &["lock scope with a one-pager before exploration"],
    tool_stack: &["notion", "figma", "miro", "zapier"],
    tagline: "adaptive orchestrator balancing flexibility with coordination",
};

static CRAFTSPERSON: RecommendationBundle = RecommendationBundle {
    strengths: &["precision", "execution excellence", "quality control"],
    quick_wins: &["batch reviews; set \u{201c}definition of done\u{201d} checklists"],
    tool_stack: &["jira", "confluence", "clickup", "airtable"],
    tagline: "precision specialist focused on execution excellence",
};

/// Static lookup of the content bundle for a primary archetype. Pure and
/// infallible: the classifier guarantees one of the four variants.
pub fn bundle_for(archetype: Archetype) -> &'static RecommendationBundle {
    match archetype {
        Archetype::Architect => &ARCHITECT,
        Archetype::Conductor => &CONDUCTOR,
        Archetype::Curator => &CURATOR,
        Archetype::Craftsperson => &CRAFTSPERSON,
    }
}

/// Tool stack for a primary archetype, specialized by the named platform.
/// An absent or unrecognized platform keeps the bundle's default stack.
pub fn tool_stack_for(archetype: Archetype, platform: Option<Platform>) -> &'static [&'static str] {
    match platform {
        Some(Platform::Microsoft) => match archetype {
            Archetype::Architect => &["microsoft 365", "planner", "sharepoint", "power automate"],
            Archetype::Conductor => &["teams", "planner", "loop", "outlook"],
            Archetype::Curator => &["planner", "teams", "onenote", "whiteboard"],
            Archetype::Craftsperson => &["to do", "onedrive", "focus assist", "teams status"],
        },
        Some(Platform::Google) => match archetype {
            Archetype::Architect => &["workspace", "sheets scripts", "sites", "appsheet"],
            Archetype::Conductor => &["meet", "calendar", "groups", "chat"],
            Archetype::Curator => &["keep", "drive", "jamboard", "forms"],
            Archetype::Craftsperson => &["docs", "drive", "calendar", "focus mode"],
        },
        Some(Platform::Slack) => match archetype {
            Archetype::Architect => &["workflow builder", "canvas", "lists", "integrations"],
            Archetype::Conductor => &["huddles", "channels", "canvas", "status"],
            Archetype::Curator => &["canvas", "bookmarks", "threads", "shared channels"],
            Archetype::Craftsperson => &["dnd mode", "saved items", "direct messages", "reminders"],
        },
        Some(Platform::Other) => match archetype {
            Archetype::Architect => &["notion", "zapier", "airtable", "monday"],
            Archetype::Conductor => &["zoom", "miro", "asana", "loom"],
            Archetype::Curator => &["figma", "dropbox", "trello", "basecamp"],
            Archetype::Craftsperson => &["linear", "github", "bear", "rescuetime"],
        },
        None => bundle_for(archetype).tool_stack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_archetype_has_a_complete_bundle() {
        for archetype in Archetype::PRIORITY {
            let bundle = bundle_for(archetype);
            assert!(!bundle.strengths.is_empty(), "{}", archetype.key());
            assert!(!bundle.quick_wins.is_empty(), "{}", archetype.key());
            assert!(!bundle.tool_stack.is_empty(), "{}", archetype.key());
            assert!(!bundle.tagline.is_empty(), "{}", archetype.key());
        }
    }

    #[test]
    fn platform_stacks_cover_every_archetype() {
        for platform in [
            Platform::Microsoft,
            Platform::Google,
            Platform::Slack,
            Platform::Other,
        ] {
            for archetype in Archetype::PRIORITY {
                let stack = tool_stack_for(archetype, Some(platform));
                assert_eq!(stack.len(), 4, "{} on {platform:?}", archetype.key());
            }
        }
    }

    #[test]
    fn absent_platform_falls_back_to_the_default_stack() {
        for archetype in Archetype::PRIORITY {
            let default = bundle_for(archetype).tool_stack;
            assert_eq!(tool_stack_for(archetype, None), default);
        }
    }

    #[test]
    fn the_other_platform_carries_its_own_stack() {
        assert_eq!(
            tool_stack_for(Archetype::Architect, Some(Platform::Other)),
            &["notion", "zapier", "airtable", "monday"]
        );
        assert_ne!(
            tool_stack_for(Archetype::Architect, Some(Platform::Other)),
            bundle_for(Archetype::Architect).tool_stack
        );
    }

    #[test]
    fn platform_values_parse_leniently() {
        assert_eq!(Platform::parse("Microsoft"), Some(Platform::Microsoft));
        assert_eq!(Platform::parse(" google "), Some(Platform::Google));
        assert_eq!(Platform::parse("other"), Some(Platform::Other));
        assert_eq!(Platform::parse("web"), None);
        assert_eq!(Platform::parse("mixed"), None);
    }
}
