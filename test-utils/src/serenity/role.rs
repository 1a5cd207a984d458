//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role with customizable fields.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed, not
/// mentionable).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake); pass the guild ID for `@everyone`
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
/// - `permissions` - Permission bitset granted by the role
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use serenity::all::Permissions;
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Mods", 0xFF0000, 10, Permissions::BAN_MEMBERS.bits());
/// assert!(role.permissions.ban_members());
/// ```
pub fn create_test_role(
    role_id: u64,
    name: &str,
    color: u32,
    position: i16,
    permissions: u64,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        // Newer Discord payloads carry gradient colors next to the legacy field
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        // Discord sends permission bitsets as strings
        "permissions": permissions.to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
