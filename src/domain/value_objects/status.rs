//! Status enumerations for every entity.
//!
//! Each status is stored as a lowercase `TEXT` value, restricted by a
//! `CHECK` constraint. Request bodies are deserialized through serde and
//! stored text is parsed with [`FromStr`]; both reject unknown values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A status string that names no variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownStatus {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Convert to database string representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownStatus;

            /// Case-insensitive, surrounding whitespace ignored.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| UnknownStatus {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

status_enum! {
    /// Account status of an admin-managed user.
    UserStatus, default = Active, {
        Active => "active",
        Inactive => "inactive",
        Disabled => "disabled",
    }
}

status_enum! {
    /// Publication status of a place.
    PlaceStatus, default = Active, {
        Active => "active",
        Pending => "pending",
        Inactive => "inactive",
    }
}

status_enum! {
    /// Publication status of a playlist.
    PlaylistStatus, default = Active, {
        Active => "active",
        Pending => "pending",
        Hidden => "hidden",
    }
}

status_enum! {
    /// Progress of a trip.
    TripStatus, default = Planned, {
        Planned => "planned",
        Ongoing => "ongoing",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

status_enum! {
    /// Moderation state shared by reviews and photos.
    ModerationStatus, default = Pending, {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

status_enum! {
    /// Who can see a playlist.
    Visibility, default = Public, {
        Public => "public",
        Private => "private",
    }
}
