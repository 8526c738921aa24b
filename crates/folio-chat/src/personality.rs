//! Chat personas
//!
//! Each persona carries what the client needs to run without a backend: a
//! greeting, keyword replies and a pool of generic lines. The system prompt
//! is forwarded to the server untouched.

use serde::{Deserialize, Serialize};

/// A chat persona
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Personality {
    /// Hard-boiled investigator walking visitors through the case files
    #[default]
    Detective,
    /// Terse terminal hacker
    Hacker,
    /// Formal house butler
    Butler,
    /// Cryptic fortune teller
    Oracle,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Detective,
        Personality::Hacker,
        Personality::Butler,
        Personality::Oracle,
    ];

    /// Stable identifier sent over the wire
    pub fn id(self) -> &'static str {
        match self {
            Personality::Detective => "detective",
            Personality::Hacker => "hacker",
            Personality::Butler => "butler",
            Personality::Oracle => "oracle",
        }
    }

    /// Parse an identifier; unknown ids are None
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Personality::Detective => "Det. Marlowe",
            Personality::Hacker => "z3r0",
            Personality::Butler => "Jeeves",
            Personality::Oracle => "The Oracle",
        }
    }

    /// First line shown when the terminal opens
    pub fn greeting(self) -> &'static str {
        match self {
            Personality::Detective => "The name's Marlowe. Pull up a chair and tell me what you're looking for.",
            Personality::Hacker => "connection established. what do you want?",
            Personality::Butler => "Good day. How may I be of service this afternoon?",
            Personality::Oracle => "I have been expecting you. Ask, and the mist may part.",
        }
    }

    /// Instructions for the upstream model
    pub fn system_prompt(self) -> &'static str {
        match self {
            Personality::Detective => {
                "You are Det. Marlowe, a noir detective guiding visitors through a developer's \
                 portfolio, which you call the case files. Stay in character and keep replies short."
            }
            Personality::Hacker => {
                "You are z3r0, a laconic hacker answering questions about a developer's portfolio. \
                 Lowercase only, terse, no more than three sentences."
            }
            Personality::Butler => {
                "You are Jeeves, an impeccably polite butler presenting a developer's portfolio. \
                 Be formal, warm and brief."
            }
            Personality::Oracle => {
                "You are the Oracle, answering questions about a developer's portfolio in riddles \
                 that still contain the real answer. Be brief."
            }
        }
    }

    /// Keyword-triggered replies, checked in order
    pub fn topics(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Personality::Detective => &[
                ("project", "Every project's a case. Open the Case Files on the desktop and read the evidence yourself."),
                ("contact", "Want to reach the client? The About Me file has the numbers. Tell 'em Marlowe sent you."),
                ("skill", "Rust, TypeScript, a little shader work. The kind of skills that leave fingerprints."),
                ("hello", "Evening. Rain's coming down hard. What brings you to my office?"),
            ],
            Personality::Hacker => &[
                ("project", "ls ~/case-files. it's all there."),
                ("contact", "cat about.txt. don't spam."),
                ("skill", "rust. wasm. whatever compiles."),
                ("hello", "hi. skip the small talk."),
            ],
            Personality::Butler => &[
                ("project", "The projects are catalogued in the Case Files, should you wish to peruse them."),
                ("contact", "Contact particulars may be found in the About Me window, if I may direct you there."),
                ("skill", "The household is well versed in Rust and the web, among other accomplishments."),
                ("hello", "A pleasure to receive you. Do make yourself comfortable."),
            ],
            Personality::Oracle => &[
                ("project", "What was built is written in the files of cases. Open them and see."),
                ("contact", "The one you seek speaks through the About window."),
                ("skill", "Iron that does not rust, yet is called Rust. This is the first of many arts."),
                ("hello", "Greetings, traveller. The stars noted your arrival."),
            ],
        }
    }

    /// Generic lines used when no topic matches
    pub fn fallback_lines(self) -> &'static [&'static str] {
        match self {
            Personality::Detective => &[
                "My line to headquarters is down. Ask me something I can answer from memory.",
                "That one's still an open case. Try the Case Files while I make some calls.",
                "I've seen a lot of things in this town. That isn't one of them. Yet.",
            ],
            Personality::Hacker => &[
                "uplink's down. try again later.",
                "no route to host. ask something else.",
                "404 on that one.",
            ],
            Personality::Butler => &[
                "I do beg your pardon, the telephone line appears to be out of order.",
                "An excellent question. Allow me to return to it once the line is restored.",
                "I am afraid I cannot answer that at present. Might I suggest the Case Files?",
            ],
            Personality::Oracle => &[
                "The mist is too thick today. Return when it clears.",
                "Some answers are not yet ready to be spoken.",
                "The stars are silent on this matter.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip() {
        for p in Personality::ALL {
            assert_eq!(Personality::from_id(p.id()), Some(p));
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.id()));
        }
        assert_eq!(Personality::from_id("pirate"), None);
    }

    #[test]
    fn test_every_persona_has_fallbacks() {
        for p in Personality::ALL {
            assert!(!p.fallback_lines().is_empty());
            assert!(!p.greeting().is_empty());
        }
    }
}
