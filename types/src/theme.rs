//! Theme preference and resolution types.
//!
//! The stored preference is three-way (`auto`/`light`/`dark`); what actually
//! renders is always two-way ([`ResolvedTheme`]). Resolution never lives in a
//! field of its own - it is derived from the preference plus the system
//! signal, so it cannot desync from its inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User's stored theme choice.
///
/// Cycles through a fixed ring on each toggle: `auto -> light -> dark -> auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Next preference in the toggle ring.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Auto => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Default for ThemePreference {
    /// First visit has no stored preference; follow the system.
    fn default() -> Self {
        Self::Auto
    }
}

#[derive(Debug, Error)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rendering mode actually in effect. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A resolved theme plus whether it was derived from the system signal.
///
/// Both auto branches record the concrete resolved theme and set
/// `auto_derived`; an explicit light/dark choice clears it. There is no
/// special-cased representation for either branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub resolved: ResolvedTheme,
    pub auto_derived: bool,
}

impl ThemeState {
    #[must_use]
    pub fn explicit(resolved: ResolvedTheme) -> Self {
        Self {
            resolved,
            auto_derived: false,
        }
    }

    #[must_use]
    pub fn auto(resolved: ResolvedTheme) -> Self {
        Self {
            resolved,
            auto_derived: true,
        }
    }
}
