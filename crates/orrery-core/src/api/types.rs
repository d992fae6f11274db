//! Events the simulation surfaces to the UI layer. Serialized as
//! tagged JSON so hosts in any language can consume them.

use serde::Serialize;

use crate::model::body::BodyInfo;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Speed readout changed (ladder step, direction flip, or pause).
    Speed {
        magnitude: f64,
        reversed: bool,
        paused: bool,
    },
    /// The displayed calendar date rolled over.
    DateDisplay { year: i32, month: u32, day: u32 },
    /// A body was picked; the info panel should open.
    Focused {
        name: &'static str,
        info: Option<BodyInfo>,
    },
    /// Focus cleared; the info panel should close.
    Unfocused,
    /// Music state changed (or a playback request went out).
    Music { playing: bool },
}

impl UiEvent {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_tagged() {
        let json = UiEvent::Speed {
            magnitude: 2.0,
            reversed: true,
            paused: false,
        }
        .to_json()
        .unwrap();
        assert!(json.contains("\"type\":\"speed\""));
        assert!(json.contains("\"reversed\":true"));
    }

    #[test]
    fn unfocused_is_a_bare_tag() {
        let json = UiEvent::Unfocused.to_json().unwrap();
        assert_eq!(json, "{\"type\":\"unfocused\"}");
    }
}
