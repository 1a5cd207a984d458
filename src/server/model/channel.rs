//! Channel domain models
//!
//! Provides the channel summary used by the listing commands, the fixed set of
//! channel type filters, and the lazily filtered listing returned by the action
//! service.

use std::fmt;
use std::str::FromStr;

use serenity::all::{ChannelType, GuildChannel};

use crate::server::error::action::ActionError;

/// Coarse channel kind, collapsing Discord's channel types into the groups the
/// listing commands filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    Category,
    Stage,
    Other,
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text | ChannelType::News => Self::Text,
            ChannelType::Voice => Self::Voice,
            ChannelType::Category => Self::Category,
            ChannelType::Stage => Self::Stage,
            _ => Self::Other,
        }
    }
}

/// A guild channel reduced to what the commands display
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    pub kind: ChannelKind,
    /// Position in the guild's channel list (for display ordering).
    pub position: u16,
}

impl ChannelSummary {
    /// Converts a Serenity guild channel to the channel domain model
    ///
    /// # Arguments
    /// - `channel` - Guild channel from Discord's REST API or a resolved command argument
    ///
    /// # Returns
    /// - `ChannelSummary` - The converted channel domain model
    pub fn from_guild_channel(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            name: channel.name.clone(),
            kind: ChannelKind::from(channel.kind),
            position: channel.position,
        }
    }
}

/// Renders the channel as a listing line, `- name (ID: id)`.
impl fmt::Display for ChannelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} (ID: {})", self.name, self.id)
    }
}

/// Channel type accepted by `channelsbytype`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTypeFilter {
    All,
    Text,
    Voice,
    Category,
    Stage,
}

impl ChannelTypeFilter {
    pub fn matches(self, kind: ChannelKind) -> bool {
        match self {
            Self::All => true,
            Self::Text => kind == ChannelKind::Text,
            Self::Voice => kind == ChannelKind::Voice,
            Self::Category => kind == ChannelKind::Category,
            Self::Stage => kind == ChannelKind::Stage,
        }
    }
}

/// Parses a filter case-insensitively.
///
/// Unknown values are an `ActionError::InvalidArgument` listing the accepted values.
impl FromStr for ChannelTypeFilter {
    type Err = ActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "text" => Ok(Self::Text),
            "voice" => Ok(Self::Voice),
            "category" => Ok(Self::Category),
            "stage" => Ok(Self::Stage),
            _ => Err(ActionError::InvalidArgument(
                "Invalid channel type. Please use 'all', 'text', 'voice', 'category', or 'stage'."
                    .to_string(),
            )),
        }
    }
}

/// Channels of one guild viewed through a type filter
///
/// Holds the guild's channels sorted by position. Matching channels are produced on
/// demand by [`ChannelListing::iter`], which may be called any number of times.
#[derive(Debug, Clone)]
pub struct ChannelListing {
    channels: Vec<ChannelSummary>,
    filter: ChannelTypeFilter,
}

impl ChannelListing {
    pub fn new(mut channels: Vec<ChannelSummary>, filter: ChannelTypeFilter) -> Self {
        channels.sort_by_key(|channel| (channel.position, channel.id));
        Self { channels, filter }
    }

    pub fn filter(&self) -> ChannelTypeFilter {
        self.filter
    }

    /// Iterates the channels matching the filter, in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ChannelSummary> + '_ {
        let filter = self.filter;
        self.channels
            .iter()
            .filter(move |channel| filter.matches(channel.kind))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
