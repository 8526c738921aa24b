//! Application surface dispatch
//!
//! Maps a window's application tag to the view the host renders inside the
//! frame. Resolution is total: an unrecognized tag yields a visible
//! [`SurfaceView::UnknownApplication`] panel, never a panic.

use serde::Serialize;
use crate::math::{Rect, Size};
use crate::window::Props;

/// Known application views
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    /// Blog / case-file reader
    CaseFiles,
    /// Multi-personality chat terminal
    Terminal,
    Snake,
    Tetris,
    /// Calculator that can crash into a blue screen
    Calculator,
    /// Static profile card
    About,
}

/// Static description of an application
#[derive(Clone, Copy, Debug)]
pub struct AppDescriptor {
    pub tag: &'static str,
    pub kind: AppKind,
    pub title: &'static str,
    /// Where the window opens (None = pseudo-random placement)
    pub default_rect: Option<Rect>,
    /// Smallest size the content lays out in
    pub min_size: Size,
}

/// Lookup table of every application the desktop knows
pub const APPLICATIONS: &[AppDescriptor] = &[
    AppDescriptor {
        tag: "case-files",
        kind: AppKind::CaseFiles,
        title: "Case Files",
        default_rect: Some(Rect::new(80.0, 60.0, 720.0, 520.0)),
        min_size: Size::new(400.0, 300.0),
    },
    AppDescriptor {
        tag: "terminal",
        kind: AppKind::Terminal,
        title: "Terminal",
        default_rect: Some(Rect::new(160.0, 100.0, 680.0, 460.0)),
        min_size: Size::new(360.0, 240.0),
    },
    AppDescriptor {
        tag: "snake",
        kind: AppKind::Snake,
        title: "Snake",
        default_rect: Some(Rect::new(240.0, 80.0, 420.0, 480.0)),
        min_size: Size::new(300.0, 360.0),
    },
    AppDescriptor {
        tag: "tetris",
        kind: AppKind::Tetris,
        title: "Tetris",
        default_rect: Some(Rect::new(300.0, 60.0, 400.0, 620.0)),
        min_size: Size::new(320.0, 480.0),
    },
    AppDescriptor {
        tag: "calculator",
        kind: AppKind::Calculator,
        title: "Calculator",
        default_rect: Some(Rect::new(420.0, 140.0, 300.0, 420.0)),
        min_size: Size::new(300.0, 360.0),
    },
    AppDescriptor {
        tag: "about",
        kind: AppKind::About,
        title: "About Me",
        default_rect: None,
        min_size: Size::new(300.0, 200.0),
    },
];

/// Look up the descriptor for a tag
pub fn descriptor(tag: &str) -> Option<&'static AppDescriptor> {
    APPLICATIONS.iter().find(|app| app.tag == tag)
}

/// What the host should render inside a frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum SurfaceView {
    /// A known application with its props
    #[serde(rename_all = "camelCase")]
    App { kind: AppKind, tag: String, props: Props },
    /// Error panel for a tag nothing is registered under
    #[serde(rename_all = "camelCase")]
    UnknownApplication { tag: String, message: String },
}

impl SurfaceView {
    /// Check if this is the unknown-application panel
    pub fn is_unknown(&self) -> bool {
        matches!(self, SurfaceView::UnknownApplication { .. })
    }
}

/// Resolve a tag to its view
pub fn resolve(tag: &str, props: &Props) -> SurfaceView {
    match descriptor(tag) {
        Some(app) => SurfaceView::App {
            kind: app.kind,
            tag: app.tag.to_string(),
            props: props.clone(),
        },
        None => SurfaceView::UnknownApplication {
            tag: tag.to_string(),
            message: format!("Unknown application: \"{}\"", tag),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_resolves_to_its_kind() {
        for app in APPLICATIONS {
            match resolve(app.tag, &Props::new()) {
                SurfaceView::App { kind, tag, .. } => {
                    assert_eq!(kind, app.kind);
                    assert_eq!(tag, app.tag);
                }
                other => panic!("{} resolved to {:?}", app.tag, other),
            }
        }
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in APPLICATIONS.iter().enumerate() {
            for b in &APPLICATIONS[i + 1..] {
                assert_ne!(a.tag, b.tag);
            }
        }
    }

    #[test]
    fn test_unknown_tags_produce_error_panel() {
        for tag in ["", "minesweeper", "SNAKE", " snake", "🐍", "case-files/../etc"] {
            let view = resolve(tag, &Props::new());
            assert!(view.is_unknown(), "{:?} should be unknown", tag);
            if let SurfaceView::UnknownApplication { tag: t, message } = view {
                assert_eq!(t, tag);
                assert!(message.contains(tag));
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        assert_eq!(resolve("nope", &Props::new()), resolve("nope", &Props::new()));
    }

    #[test]
    fn test_props_pass_through() {
        let mut props = Props::new();
        props.insert("post".to_string(), serde_json::json!("hello-world"));

        match resolve("case-files", &props) {
            SurfaceView::App { props: p, .. } => assert_eq!(p, props),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_surface_view_json_shape() {
        let json = serde_json::to_value(resolve("ghost", &Props::new())).unwrap();
        assert_eq!(json["view"], "unknownApplication");
        assert_eq!(json["tag"], "ghost");

        let json = serde_json::to_value(resolve("snake", &Props::new())).unwrap();
        assert_eq!(json["view"], "app");
        assert_eq!(json["kind"], "snake");
    }
}
