//! Fixed name tables: entity domains, package domains, service actions.
//!
//! These are maintained by hand; hacheck does not model the full platform
//! domain list.

/// Domains an extracted entity id may start with.
pub const ENTITY_DOMAINS: &[&str] = &[
    "automation",
    "binary_sensor",
    "button",
    "calendar",
    "camera",
    "climate",
    "counter",
    "cover",
    "device_tracker",
    "fan",
    "group",
    "humidifier",
    "input_boolean",
    "input_button",
    "input_datetime",
    "input_number",
    "input_select",
    "input_text",
    "light",
    "lock",
    "media_player",
    "notify",
    "number",
    "person",
    "remote",
    "scene",
    "script",
    "select",
    "sensor",
    "siren",
    "sun",
    "switch",
    "timer",
    "update",
    "vacuum",
    "water_heater",
    "weather",
    "zone",
];

/// Top-level package keys that do not trigger an unknown-domain warning.
pub const PACKAGE_DOMAINS: &[&str] = &[
    "automation",
    "script",
    "input_boolean",
    "input_number",
    "input_select",
    "input_text",
    "input_datetime",
    "input_button",
    "timer",
    "counter",
    "template",
    "sensor",
    "binary_sensor",
    "switch",
    "light",
    "cover",
    "fan",
    "climate",
    "lock",
    "media_player",
    "notify",
    "group",
    "shell_command",
    "rest_command",
    "homeassistant",
    "knx",
    "alert",
    "scene",
    "mqtt",
];

/// Service names that look like object ids (`light.turn_on`).
///
/// Matched regardless of domain, so an entity literally named
/// `switch.toggle` is never extracted either.
pub const SERVICE_ACTIONS: &[&str] = &[
    "turn_on",
    "turn_off",
    "toggle",
    "reload",
    // cover
    "close_cover",
    "open_cover",
    "stop_cover",
    "set_cover_position",
    "set_cover_tilt_position",
    // lock
    "lock",
    "unlock",
    "open",
    // timer
    "start",
    "cancel",
    "pause",
    "finish",
    "change",
    // climate
    "set_temperature",
    "set_hvac_mode",
    "set_fan_mode",
    "set_preset_mode",
    // media_player
    "play_media",
    "media_play",
    "media_pause",
    "media_stop",
    "volume_set",
    "volume_up",
    "volume_down",
    // fan
    "set_speed",
    "set_percentage",
    "set_direction",
    // vacuum
    "start_pause",
    "return_to_base",
    "send_command",
    // homeassistant
    "check_config",
    "reload_core_config",
    "restart",
    // automation / script
    "trigger",
];

pub fn is_entity_domain(domain: &str) -> bool {
    ENTITY_DOMAINS.contains(&domain)
}

pub fn is_package_domain(key: &str) -> bool {
    PACKAGE_DOMAINS.contains(&key)
}

pub fn is_service_action(object_id: &str) -> bool {
    SERVICE_ACTIONS.contains(&object_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_actions_are_bare_names() {
        assert!(is_service_action("turn_on"));
        assert!(is_service_action("toggle"));
        assert!(!is_service_action("kitchen"));
        assert!(!is_service_action("light.turn_on"));
    }

    #[test]
    fn automation_and_script_are_both_kinds_of_domain() {
        for name in ["automation", "script"] {
            assert!(is_entity_domain(name));
            assert!(is_package_domain(name));
        }
        assert!(is_package_domain("shell_command"));
        assert!(!is_entity_domain("shell_command"));
    }
}
