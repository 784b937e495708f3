//! Application constants and per-provider presentation values.
//!
//! Icons, palettes and fixed strings are immutable and shared by every
//! request; nothing here is configurable at runtime.

/// Default outbound endpoints
pub mod endpoints {
    /// Discord webhook API base, completed with `/{id}/{token}`
    pub const DISCORD_WEBHOOK_BASE_URL: &str = "https://discord.com/api/webhooks";

    /// DeployHQ real-time deploy trigger base, completed with `/{id}/{token}`
    pub const DEPLOYHQ_DEPLOY_BASE_URL: &str = "https://rti.deployhq.com/deploy";
}

/// Outbound message limits
pub mod limits {
    /// Maximum characters in a single embed description or field value
    pub const MAX_FIELD_LENGTH: usize = 1024;

    /// Marker appended to truncated text
    pub const ELLIPSIS: &str = "...";

    /// Default inbound body limit (50 MiB)
    pub const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;
}

/// Commit message conventions
pub mod commits {
    /// A commit message starting with this character is never shown
    pub const PRIVATE_MARKER: char = '~';

    /// Replacement text for private commits
    pub const PRIVATE_TEXT: &str = "This commit has been marked as private";

    /// GitLab pushes whose first commit starts with this are not reported
    pub const SILENT_MARKER: char = '#';

    /// Substrings that identify merge commits in multi-commit pushes
    pub const MERGE_MARKERS: [&str; 2] = ["Merge", "branch"];
}

/// Embed colors
pub mod colors {
    /// Color table shared by the source-control providers
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        pub default: u32,
        pub success: u32,
        pub failure: u32,
        pub opened: u32,
        pub merged: u32,
        pub closed: u32,
    }

    pub const SOURCE_CONTROL: Palette = Palette {
        default: 226_760,
        success: 40_000,
        failure: 10_430_000,
        opened: 8_069_775,
        merged: 8_311_585,
        closed: 16_711_682,
    };

    /// DeployHQ deployment states
    pub mod deployhq {
        pub const COMPLETED: u32 = 40_000;
        pub const FAILED: u32 = 10_430_000;
        pub const RUNNING: u32 = 226_760;
    }

    pub const GMOD: u32 = 226_760;
    pub const EVENT_ALERT: u32 = 0x07cb00;
}

/// Footer icons
pub mod icons {
    pub const GITHUB: &str =
        "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";
    pub const GITLAB: &str = "https://about.gitlab.com/images/press/press-kit-icon.png";
    pub const DEPLOYHQ: &str = "https://www.deployhq.com/assets/logo-square.png";
    pub const GMOD: &str = "https://upload.wikimedia.org/wikipedia/commons/3/34/Gmod_logo.png";
}

/// Deploy trigger request values
pub mod deploy {
    /// `new_ref` sent to DeployHQ; it resolves to the branch head
    pub const NEW_REF: &str = "latest";
}
