use serde::{Deserialize, Serialize};

/// Discrete player command.
///
/// The integer codes are the wire format host shells use; see
/// [`LanderCommand::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanderCommand {
    RotateUp,
    RotateDown,
    RotateLeft,
    RotateRight,
    ThrustForward,
    ThrustBackward,
}

impl LanderCommand {
    pub const ROTATE_UP: i32 = 0;
    pub const ROTATE_DOWN: i32 = 1;
    pub const ROTATE_LEFT: i32 = 2;
    pub const ROTATE_RIGHT: i32 = 3;
    pub const THRUST_FORWARD: i32 = 4;
    pub const THRUST_BACKWARD: i32 = 5;

    /// Decodes a host command code. Unknown codes map to `None`.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::ROTATE_UP => Some(Self::RotateUp),
            Self::ROTATE_DOWN => Some(Self::RotateDown),
            Self::ROTATE_LEFT => Some(Self::RotateLeft),
            Self::ROTATE_RIGHT => Some(Self::RotateRight),
            Self::THRUST_FORWARD => Some(Self::ThrustForward),
            Self::THRUST_BACKWARD => Some(Self::ThrustBackward),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::RotateUp => Self::ROTATE_UP,
            Self::RotateDown => Self::ROTATE_DOWN,
            Self::RotateLeft => Self::ROTATE_LEFT,
            Self::RotateRight => Self::ROTATE_RIGHT,
            Self::ThrustForward => Self::THRUST_FORWARD,
            Self::ThrustBackward => Self::THRUST_BACKWARD,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_rotation(self) -> bool {
        !self.is_thrust()
    }

    #[inline]
    #[must_use]
    pub fn is_thrust(self) -> bool {
        matches!(self, Self::ThrustForward | Self::ThrustBackward)
    }

    /// Axis and sign a rotate command drives. `None` for thrust.
    ///
    /// Left/right yaw about Y, down/up pitch about X.
    #[must_use]
    pub fn rotation_axis(self) -> Option<(Axis, f32)> {
        match self {
            Self::RotateLeft => Some((Axis::Y, 1.0)),
            Self::RotateRight => Some((Axis::Y, -1.0)),
            Self::RotateDown => Some((Axis::X, 1.0)),
            Self::RotateUp => Some((Axis::X, -1.0)),
            Self::ThrustForward | Self::ThrustBackward => None,
        }
    }

    /// Sign of a thrust command. `None` for rotations.
    #[must_use]
    pub fn thrust_sign(self) -> Option<f32> {
        match self {
            Self::ThrustForward => Some(1.0),
            Self::ThrustBackward => Some(-1.0),
            _ => None,
        }
    }
}

/// Rotation axis in the vehicle's Euler vector (x = pitch, y = yaw, z = roll).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}
