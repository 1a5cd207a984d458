//! Guild, member and user domain models
//!
//! Defines the guild-level views the action service works with and the conversions
//! from Serenity's API structs, including the permission fold used to decide
//! whether a member may moderate.

use std::collections::HashMap;
use std::fmt;

use serenity::all::{GuildId, Member, PartialGuild, Permissions, Role, RoleId, User, UserId};

/// The guild domain model
///
/// Only the fields needed to identify a guild and describe it in `guildinfo`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
    /// Approximate member count as reported by Discord, if it was requested.
    pub member_count: Option<u64>,
}

impl GuildSummary {
    /// Converts a Serenity partial guild to the guild domain model
    ///
    /// # Arguments
    /// - `guild` - Guild returned by Discord's REST API, ideally fetched with counts
    ///
    /// # Returns
    /// - `GuildSummary` - The converted guild domain model
    pub fn from_partial_guild(guild: &PartialGuild) -> Self {
        Self {
            id: guild.id.get(),
            name: guild.name.clone(),
            owner_id: guild.owner_id.get(),
            member_count: guild.approximate_member_count,
        }
    }
}

/// A guild member together with the permissions they hold in that guild
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    pub user_id: u64,
    pub name: String,
    pub permissions: Permissions,
}

impl GuildMember {
    /// Converts a Serenity member to the member domain model
    ///
    /// Permissions are resolved against the member's guild via [`member_permissions`].
    ///
    /// # Arguments
    /// - `guild` - The member's guild, providing its owner and roles
    /// - `member` - Member returned by Discord's REST API
    pub fn from_member(guild: &PartialGuild, member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            name: member.user.name.clone(),
            permissions: member_permissions(
                guild.id,
                guild.owner_id,
                &guild.roles,
                member.user.id,
                &member.roles,
            ),
        }
    }

    /// Whether the member holds every permission in `required`.
    pub fn has(&self, required: Permissions) -> bool {
        self.permissions.contains(required)
    }
}

/// A Discord user, independent of any guild
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordUser {
    pub id: u64,
    pub name: String,
}

impl From<&User> for DiscordUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
        }
    }
}

/// Resolves the guild-level permissions of a member.
///
/// The guild owner holds every permission. Otherwise the permissions of the
/// `@everyone` role (whose ID equals the guild ID) are combined with those of each
/// role the member has. Holding `ADMINISTRATOR` grants every permission, matching
/// how Discord itself evaluates it. Channel overwrites are not considered.
///
/// # Arguments
/// - `guild_id` - The guild the member belongs to
/// - `owner_id` - The guild owner
/// - `roles` - All roles of the guild
/// - `user_id` - The member's user ID
/// - `member_roles` - IDs of the roles assigned to the member
///
/// # Returns
/// - `Permissions` - Effective guild-level permissions of the member
pub fn member_permissions(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    user_id: UserId,
    member_roles: &[RoleId],
) -> Permissions {
    if user_id == owner_id {
        return Permissions::all();
    }

    let everyone = roles
        .get(&RoleId::new(guild_id.get()))
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    let permissions = member_roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .fold(everyone, |acc, role| acc | role.permissions);

    expand_administrator(permissions)
}

/// `ADMINISTRATOR` implies every other permission.
pub fn expand_administrator(permissions: Permissions) -> Permissions {
    if permissions.administrator() {
        Permissions::all()
    } else {
        permissions
    }
}

/// Guild details reported by `guildinfo`
#[derive(Debug, Clone, PartialEq)]
pub struct GuildInfo {
    pub id: u64,
    pub name: String,
    pub member_count: Option<u64>,
    pub owner_id: u64,
    pub owner_name: String,
}

impl fmt::Display for GuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Guild Name: {}", self.name)?;
        writeln!(f, "Guild ID: {}", self.id)?;
        match self.member_count {
            Some(count) => writeln!(f, "Member Count: {}", count)?,
            None => writeln!(f, "Member Count: unknown")?,
        }
        writeln!(f, "Owner Name: {}", self.owner_name)?;
        write!(f, "Owner ID: {}", self.owner_id)
    }
}
