//! `cfg`: print the resolved configuration as JSON, each value paired with
//! its source (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "turn_timeout_secs": {
            "value": config.turn_timeout_secs,
            "source": sources.turn_timeout_secs,
        },
        "think_ms": {
            "value": config.think_ms,
            "source": sources.think_ms,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn prints_every_setting_with_its_source() {
        unsafe {
            std::env::remove_var(config::CONFIG_ENV);
            std::env::set_var(config::THINK_MS_ENV, "250");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var(config::THINK_MS_ENV);
        }
        assert!(result.is_ok());
        assert!(err.is_empty());

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        for key in [
            "starting_chips",
            "small_blind",
            "big_blind",
            "turn_timeout_secs",
            "think_ms",
            "seed",
            "ai",
        ] {
            assert!(json[key].get("value").is_some(), "missing {}", key);
        }
        assert_eq!(json["think_ms"]["value"], 250);
        assert_eq!(json["think_ms"]["source"], "env");
        assert_eq!(json["ai"]["value"], "random");
        assert_eq!(json["ai"]["source"], "default");
    }

    #[test]
    #[serial]
    fn invalid_configuration_is_reported() {
        unsafe {
            std::env::set_var(config::BIG_BLIND_ENV, "5");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var(config::BIG_BLIND_ENV);
        }
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("Invalid configuration"));
    }
}
