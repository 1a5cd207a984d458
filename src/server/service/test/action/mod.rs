use crate::server::{
    error::action::{ActionError, ActionErrorKind, Resource},
    model::{action::ActionRequest, channel::ChannelKind},
    platform::fake::{FakePlatform, PlatformCall},
    service::action::{ActionService, BAN_REASON},
};
use serenity::all::Permissions;

mod ban_user;
mod channels_by_type;
mod guild_info;
mod kick_user;
mod send_message;

const GUILD: u64 = 10;
const MODERATOR: u64 = 1;
const TARGET: u64 = 2;
const UNKNOWN_GUILD: u64 = 99;

/// Guild 10 with a fully privileged moderator 1 and a plain member 2.
fn moderated_guild() -> FakePlatform {
    FakePlatform::new()
        .with_guild(GUILD, "Test Guild", MODERATOR)
        .with_member(
            GUILD,
            MODERATOR,
            "moderator",
            Permissions::BAN_MEMBERS | Permissions::KICK_MEMBERS | Permissions::ADMINISTRATOR,
        )
        .with_member(GUILD, TARGET, "target", Permissions::empty())
}
