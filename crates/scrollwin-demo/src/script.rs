//! Edge-event scripts.
//!
//! A script stands in for the visibility observer: each token is one event
//! delivered to the list, in order, and each is processed to completion
//! before the next.
//!
//! ```text
//! b | bottom | down        bottom sentinel visible
//! t | top | up             top sentinel visible
//! total=N                  new total item count (validated)
//! <token>*K                repeat a scroll token K times (K <= MAX_REPEAT)
//! ```
//!
//! Tokens are separated by commas and/or whitespace.

use std::fmt;

use serde::Serialize;

use crate::error::{DemoError, Result};
use crate::input::parse_items_total;

/// Largest repeat count accepted after `*`.
pub const MAX_REPEAT: usize = 100_000;

/// One host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ScriptEvent {
    Bottom,
    Top,
    Total(usize),
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => f.write_str("bottom"),
            Self::Top => f.write_str("top"),
            Self::Total(total) => write!(f, "total={total}"),
        }
    }
}

/// Parse a whole script. An empty script yields no events.
pub fn parse_script(script: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    let tokens = script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    for (position, token) in tokens.enumerate() {
        let invalid = || DemoError::InvalidScript {
            token: token.to_string(),
            position,
        };

        if let Some(raw) = token.strip_prefix("total=") {
            // Total input goes through the same validation as interactive input.
            events.push(ScriptEvent::Total(parse_items_total(raw)?));
            continue;
        }

        let (name, repeat) = match token.split_once('*') {
            Some((name, count)) => match count.parse::<usize>() {
                Ok(repeat) if repeat <= MAX_REPEAT => (name, repeat),
                _ => return Err(invalid()),
            },
            None => (token, 1),
        };
        let event = match name.to_ascii_lowercase().as_str() {
            "b" | "bottom" | "down" => ScriptEvent::Bottom,
            "t" | "top" | "up" => ScriptEvent::Top,
            _ => return Err(invalid()),
        };
        events.extend(std::iter::repeat_n(event, repeat));
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        let events = parse_script("b, bottom down t top,up").expect("valid script");
        assert_eq!(
            events,
            vec![
                ScriptEvent::Bottom,
                ScriptEvent::Bottom,
                ScriptEvent::Bottom,
                ScriptEvent::Top,
                ScriptEvent::Top,
                ScriptEvent::Top,
            ]
        );
    }

    #[test]
    fn expands_repeats() {
        let events = parse_script("b*3 t*0 t").expect("valid script");
        assert_eq!(
            events,
            vec![
                ScriptEvent::Bottom,
                ScriptEvent::Bottom,
                ScriptEvent::Bottom,
                ScriptEvent::Top,
            ]
        );
    }

    #[test]
    fn total_tokens_are_validated() {
        assert_eq!(
            parse_script("total=10 b").expect("valid script"),
            vec![ScriptEvent::Total(10), ScriptEvent::Bottom]
        );
        assert!(matches!(
            parse_script("b total=-4"),
            Err(DemoError::InvalidTotal { .. })
        ));
    }

    #[test]
    fn unknown_token_reports_position() {
        let err = parse_script("b b sideways").expect_err("invalid script");
        match err {
            DemoError::InvalidScript { token, position } => {
                assert_eq!(token, "sideways");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_repeat_count_is_rejected() {
        assert!(matches!(
            parse_script("b*x"),
            Err(DemoError::InvalidScript { .. })
        ));
    }

    #[test]
    fn oversized_repeat_is_rejected() {
        assert_eq!(
            parse_script(&format!("b*{MAX_REPEAT}")).map(|events| events.len()).ok(),
            Some(MAX_REPEAT)
        );
        let err = parse_script(&format!("t b*{}", usize::MAX)).expect_err("repeat too large");
        assert!(matches!(err, DemoError::InvalidScript { position: 1, .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_script_is_empty() {
        assert!(parse_script("  , ").expect("valid script").is_empty());
    }

    #[test]
    fn display_matches_token_syntax() {
        assert_eq!(ScriptEvent::Total(7).to_string(), "total=7");
        assert_eq!(ScriptEvent::Bottom.to_string(), "bottom");
    }
}
