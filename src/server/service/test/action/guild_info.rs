use super::*;

/// Tests gathering guild details with a resolvable owner.
///
/// Expected: Ok with name, ID, member count and owner details
#[tokio::test]
async fn reports_guild_and_owner() -> Result<(), ActionError> {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let info = service.guild_info(GUILD).await?;

    assert_eq!(info.id, GUILD);
    assert_eq!(info.name, "Test Guild");
    assert_eq!(info.member_count, Some(2));
    assert_eq!(info.owner_id, MODERATOR);
    assert_eq!(info.owner_name, "moderator");

    Ok(())
}

#[tokio::test]
async fn fails_when_guild_unknown() {
    let platform = moderated_guild();
    let service = ActionService::new(&platform);

    let result = service.guild_info(UNKNOWN_GUILD).await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Guild))));
}

/// Tests a guild whose owner cannot be resolved.
///
/// Expected: Err(NotFound(Owner))
#[tokio::test]
async fn fails_when_owner_unknown() {
    let platform = FakePlatform::new().with_guild(GUILD, "Orphaned", 555);
    let service = ActionService::new(&platform);

    let result = service.guild_info(GUILD).await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Owner))));
    assert_eq!(result.unwrap_err().to_string(), "Owner not found");
}
