use super::*;

fn guild_with_channels() -> FakePlatform {
    moderated_guild()
        .with_channel(GUILD, 30, "Lobby", ChannelKind::Voice, 2)
        .with_channel(GUILD, 20, "general", ChannelKind::Text, 1)
        .with_channel(GUILD, 10, "Info", ChannelKind::Category, 0)
        .with_channel(GUILD, 40, "Town Hall", ChannelKind::Stage, 3)
        .with_channel(GUILD, 21, "rules", ChannelKind::Text, 0)
        .with_channel(77, 50, "elsewhere", ChannelKind::Text, 0)
}

async fn listed(platform: &FakePlatform, filter: &str) -> Vec<u64> {
    ActionService::new(platform)
        .channels_by_type(GUILD, filter)
        .await
        .unwrap()
        .iter()
        .map(|channel| channel.id)
        .collect()
}

/// Tests every filter yields only its own channels, in position order.
///
/// Expected: matching channel IDs of the requested guild only
#[tokio::test]
async fn filters_channels_by_type() {
    let platform = guild_with_channels();

    assert_eq!(listed(&platform, "all").await, vec![10, 21, 20, 30, 40]);
    assert_eq!(listed(&platform, "text").await, vec![21, 20]);
    assert_eq!(listed(&platform, "VOICE").await, vec![30]);
    assert_eq!(listed(&platform, "category").await, vec![10]);
    assert_eq!(listed(&platform, "stage").await, vec![40]);
}

/// Tests an unknown filter is rejected regardless of the guild.
///
/// Verifies that the filter is checked before the guild, so known, unknown and
/// empty guilds all fail the same way.
///
/// Expected: Err(InvalidArgument) for every guild
#[tokio::test]
async fn rejects_unknown_filter_for_any_guild() {
    let platform = guild_with_channels();
    let service = ActionService::new(&platform);

    for guild_id in [GUILD, UNKNOWN_GUILD, 0] {
        let result = service.channels_by_type(guild_id, "bogus").await;

        assert_eq!(
            result.map_err(|e| e.kind()).err(),
            Some(ActionErrorKind::InvalidArgument)
        );
    }
}

#[tokio::test]
async fn fails_when_guild_unknown() {
    let platform = guild_with_channels();
    let service = ActionService::new(&platform);

    let result = service.channels_by_type(UNKNOWN_GUILD, "all").await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Guild))));
}
