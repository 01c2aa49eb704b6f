//! Testing utilities and harness for Glissando

pub mod clock;
pub mod host;
pub mod notifications;
pub mod robot;
pub mod robot_assertions;

pub use clock::ManualClock;
pub use host::RecordingHost;
pub use notifications::{Notification, NotificationLog};
pub use robot::*;

pub mod prelude {
    pub use crate::clock::ManualClock;
    pub use crate::host::RecordingHost;
    pub use crate::notifications::{Notification, NotificationLog};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
