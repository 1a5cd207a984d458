use super::*;

/// Tests banning a member as a fully privileged moderator.
///
/// Verifies that the service issues exactly one ban call for the target with the
/// fixed audit reason and returns a confirmation referencing both users.
///
/// Expected: Ok with confirmation and one recorded ban
#[tokio::test]
async fn bans_member_when_moderator_is_authorized() -> Result<(), ActionError> {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let message = service.ban_user(MODERATOR, TARGET, GUILD).await?;

    assert_eq!(message, "User 2 has been banned by moderator 1");
    assert_eq!(
        platform.calls().await,
        vec![PlatformCall::Ban {
            guild_id: GUILD,
            user_id: TARGET,
            reason: BAN_REASON.to_string(),
        }]
    );

    Ok(())
}

/// Tests banning in a guild the platform does not know.
///
/// Expected: Err(NotFound(Guild)) with no mutating call
#[tokio::test]
async fn fails_when_guild_unknown() {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let result = service.ban_user(MODERATOR, TARGET, UNKNOWN_GUILD).await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Guild))));
    assert_eq!(result.unwrap_err().to_string(), "Guild not found");
    assert!(platform.calls().await.is_empty());
}

/// Tests a moderator without administrator is rejected.
///
/// Verifies that `BAN_MEMBERS` alone is not enough. An administrator always passes
/// the check because administrator implies every other permission.
///
/// Expected: Err(Forbidden) with no mutating call, for every non-administrator set
#[tokio::test]
async fn requires_both_ban_and_administrator() {
    for permissions in [
        Permissions::empty(),
        Permissions::BAN_MEMBERS,
        Permissions::BAN_MEMBERS | Permissions::KICK_MEMBERS,
    ] {
        let platform = FakePlatform::new()
            .with_guild(GUILD, "Test Guild", 100)
            .with_member(GUILD, MODERATOR, "moderator", permissions)
            .with_member(GUILD, TARGET, "target", Permissions::empty());
        let service = ActionService::new(&platform);

        let result = service.ban_user(MODERATOR, TARGET, GUILD).await;

        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(ActionErrorKind::Forbidden),
            "permissions {:?} should not allow banning",
            permissions
        );
        assert!(platform.calls().await.is_empty());
    }
}

/// Tests a moderator holding only the administrator permission.
///
/// Expected: Ok with one recorded ban
#[tokio::test]
async fn administrator_alone_may_ban() -> Result<(), ActionError> {
    let platform = FakePlatform::new()
        .with_guild(GUILD, "Test Guild", 100)
        .with_member(GUILD, MODERATOR, "moderator", Permissions::ADMINISTRATOR)
        .with_member(GUILD, TARGET, "target", Permissions::empty());
    let service = ActionService::new(&platform);

    service.ban_user(MODERATOR, TARGET, GUILD).await?;

    assert_eq!(platform.calls().await.len(), 1);

    Ok(())
}

/// Tests a moderator who is not a member of the guild.
///
/// Expected: Err(Forbidden) with no mutating call
#[tokio::test]
async fn forbids_moderator_outside_guild() {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let result = service.ban_user(42, TARGET, GUILD).await;

    assert!(matches!(result, Err(ActionError::Forbidden(_))));
    assert!(platform.calls().await.is_empty());
}

/// Tests banning a user who is not a member of the guild.
///
/// Expected: Err(NotFound(User)) with no mutating call
#[tokio::test]
async fn fails_when_target_not_member() {
    let platform = moderated_guild().with_user(3, "outsider");
    let service = ActionService::new(&platform);

    let result = service.ban_user(MODERATOR, 3, GUILD).await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::User))));
    assert!(platform.calls().await.is_empty());
}

/// Tests a ban Discord rejects is surfaced without retrying.
///
/// Expected: Err(External) after exactly one ban attempt
#[tokio::test]
async fn surfaces_rejected_ban_without_retry() {
    let platform = moderated_guild().failing("Missing Permissions");
    let service = ActionService::new(&platform);

    let result = service.ban_user(MODERATOR, TARGET, GUILD).await;

    assert_eq!(
        result.map_err(|e| e.kind()),
        Err(ActionErrorKind::ExternalFailure)
    );
    assert_eq!(platform.calls().await.len(), 1);
}
