use web_time::Duration;

use crate::counter::ClapState;

/// Per-user limit of the compact button.
pub const CLASSIC_MAX_USER_CLAP: u32 = 12;
/// Per-user limit of the roomier variant.
pub const EXTENDED_MAX_USER_CLAP: u32 = 50;

/// Everything a clap widget instance is created with.
///
/// `initial.count` must not exceed `max_user_clap`; this is a precondition and
/// is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ClapConfig {
    pub max_user_clap: u32,
    pub initial: ClapState,
    /// How long the "syncing reset" indicator stays up.
    pub upload_delay: Duration,
    /// Base duration every primitive of the clap timeline is derived from.
    pub base_duration: Duration,
}

impl ClapConfig {
    pub fn classic() -> Self {
        Self {
            max_user_clap: CLASSIC_MAX_USER_CLAP,
            initial: ClapState {
                count: 0,
                total_count: 275,
                is_clicked: false,
            },
            upload_delay: Duration::from_millis(3000),
            base_duration: Duration::from_millis(300),
        }
    }

    pub fn extended() -> Self {
        Self {
            max_user_clap: EXTENDED_MAX_USER_CLAP,
            initial: ClapState {
                count: 20,
                total_count: 1000,
                is_clicked: true,
            },
            ..Self::classic()
        }
    }

    pub fn with_max(mut self, max_user_clap: u32) -> Self {
        self.max_user_clap = max_user_clap;
        self
    }

    pub fn with_initial(mut self, initial: ClapState) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_upload_delay(mut self, delay: Duration) -> Self {
        self.upload_delay = delay;
        self
    }

    pub fn with_base_duration(mut self, duration: Duration) -> Self {
        self.base_duration = duration;
        self
    }
}

impl Default for ClapConfig {
    fn default() -> Self {
        Self::classic()
    }
}
