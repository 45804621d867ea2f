//! Exercise modes, the count channels they map to, and the shared mode cell.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// One of the movements the counting service can track.
///
/// The discriminant is the id sent as `exercise_mode` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ExerciseMode {
    #[default]
    LeftBicepCurl = 1,
    Squat = 2,
    Pushup = 3,
    JumpingJack = 4,
}

/// A count field reported by `GET /get_counts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    BicepCurlLeft,
    BicepCurlRight,
    Squat,
    Pushup,
    JumpingJack,
}

impl ExerciseMode {
    pub const ALL: [ExerciseMode; 4] = [
        ExerciseMode::LeftBicepCurl,
        ExerciseMode::Squat,
        ExerciseMode::Pushup,
        ExerciseMode::JumpingJack,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn channel(self) -> Channel {
        match self {
            ExerciseMode::LeftBicepCurl => Channel::BicepCurlLeft,
            ExerciseMode::Squat => Channel::Squat,
            ExerciseMode::Pushup => Channel::Pushup,
            ExerciseMode::JumpingJack => Channel::JumpingJack,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExerciseMode::LeftBicepCurl => "Bicep Curl",
            ExerciseMode::Squat => "Squat",
            ExerciseMode::Pushup => "Pushup",
            ExerciseMode::JumpingJack => "Jumping Jack",
        }
    }
}

impl fmt::Display for ExerciseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.id())
    }
}

impl Channel {
    pub fn field_name(self) -> &'static str {
        match self {
            Channel::BicepCurlLeft => "bicep_curl_left",
            Channel::BicepCurlRight => "bicep_curl_right",
            Channel::Squat => "squat",
            Channel::Pushup => "pushup",
            Channel::JumpingJack => "jumping_jack",
        }
    }
}

/// Handle to the currently selected mode.
///
/// Clones share one cell. `ModeController` is the only writer; the poller
/// reads it on every tick. Single-threaded by construction (`Rc`).
#[derive(Debug, Clone, Default)]
pub struct ModeCell(Rc<Cell<ExerciseMode>>);

impl ModeCell {
    pub fn new(initial: ExerciseMode) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    pub fn get(&self) -> ExerciseMode {
        self.0.get()
    }

    pub(crate) fn set(&self, mode: ExerciseMode) {
        self.0.set(mode);
    }
}

impl PartialEq for ModeCell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_mode() {
        assert_eq!(ExerciseMode::default(), ExerciseMode::LeftBicepCurl);
        assert_eq!(ModeCell::default().get(), ExerciseMode::LeftBicepCurl);
    }

    #[test]
    fn ids_match_wire_values() {
        let ids: Vec<u8> = ExerciseMode::ALL.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(ExerciseMode::from_id(3), Some(ExerciseMode::Pushup));
        assert_eq!(ExerciseMode::from_id(0), None);
        assert_eq!(ExerciseMode::from_id(5), None);
    }

    #[test]
    fn every_mode_has_its_own_channel() {
        assert_eq!(ExerciseMode::LeftBicepCurl.channel().field_name(), "bicep_curl_left");
        assert_eq!(ExerciseMode::Squat.channel().field_name(), "squat");
        assert_eq!(ExerciseMode::Pushup.channel().field_name(), "pushup");
        assert_eq!(ExerciseMode::JumpingJack.channel().field_name(), "jumping_jack");
    }

    #[test]
    fn clones_share_state() {
        let a = ModeCell::default();
        let b = a.clone();
        a.set(ExerciseMode::Squat);
        assert_eq!(b.get(), ExerciseMode::Squat);
        assert_eq!(a, b);
        assert_ne!(a, ModeCell::default());
    }
}
