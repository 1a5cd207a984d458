use super::*;

/// Tests sending a message to a known channel.
///
/// Verifies that the text is sent verbatim, once, without any permission check.
///
/// Expected: Ok with confirmation and one recorded send
#[tokio::test]
async fn sends_text_verbatim() -> Result<(), ActionError> {
    let platform =
        FakePlatform::new().with_channel(GUILD, 5, "general", ChannelKind::Text, 0);
    let service = ActionService::new(&platform);

    let message = service.send_message(5, "hi  *there*").await?;

    assert_eq!(message, "Message sent to channel 5");
    assert_eq!(
        platform.calls().await,
        vec![PlatformCall::SendMessage {
            channel_id: 5,
            text: "hi  *there*".to_string(),
        }]
    );

    Ok(())
}

/// Tests sending to a channel the platform does not know.
///
/// Expected: Err(NotFound(Channel)) with no send
#[tokio::test]
async fn fails_when_channel_unknown() {
    let platform = FakePlatform::new();
    let service = ActionService::new(&platform);

    let result = service.send_message(5, "hi").await;

    assert!(matches!(result, Err(ActionError::NotFound(Resource::Channel))));
    assert_eq!(result.unwrap_err().to_string(), "Channel not found");
    assert!(platform.calls().await.is_empty());
}
