use super::*;

/// Tests kicking a member as a moderator holding `KICK_MEMBERS`.
///
/// Expected: Ok with confirmation and one recorded kick
#[tokio::test]
async fn kicks_member_when_moderator_is_authorized() -> Result<(), ActionError> {
    let platform = FakePlatform::new()
        .with_guild(GUILD, "Test Guild", 100)
        .with_member(GUILD, MODERATOR, "moderator", Permissions::KICK_MEMBERS)
        .with_member(GUILD, TARGET, "target", Permissions::empty());
    let service = ActionService::new(&platform);

    let message = service.kick_user(MODERATOR, TARGET, GUILD).await?;

    assert_eq!(message, "User 2 has been kicked by moderator 1");
    assert_eq!(
        platform.calls().await,
        vec![PlatformCall::Kick {
            guild_id: GUILD,
            user_id: TARGET,
        }]
    );

    Ok(())
}

/// Tests kicking without the kick permission.
///
/// Expected: Err(Forbidden) with no mutating call
#[tokio::test]
async fn forbids_moderator_without_kick_permission() {
    let platform = FakePlatform::new()
        .with_guild(GUILD, "Test Guild", 100)
        .with_member(GUILD, MODERATOR, "moderator", Permissions::BAN_MEMBERS)
        .with_member(GUILD, TARGET, "target", Permissions::empty());
    let service = ActionService::new(&platform);

    let result = service.kick_user(MODERATOR, TARGET, GUILD).await;

    assert!(matches!(result, Err(ActionError::Forbidden(_))));
    assert!(platform.calls().await.is_empty());
}

/// Tests kicking someone who already left the guild.
///
/// Expected: Err(NotFound(Member)) with no mutating call
#[tokio::test]
async fn fails_when_target_not_member() {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let result = service.kick_user(MODERATOR, 3, GUILD).await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Member))));
    assert!(platform.calls().await.is_empty());
}

#[tokio::test]
async fn fails_when_guild_unknown() {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let result = service.kick_user(MODERATOR, TARGET, UNKNOWN_GUILD).await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Guild))));
    assert!(platform.calls().await.is_empty());
}
